mod account;
mod console;
mod error;
mod money;
mod session;

use std::io;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use crate::error::Result;
use crate::session::Session;

/// Interactive tracker for two bank-held investments: a checking account
/// and a certificate of deposit.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Args {}

fn main() -> Result<()> {
    Args::parse();
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .init()
        .expect("Unable to initialize logger");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    console::print_banner(&mut output)?;
    let Some(name) = console::prompt(&mut input, &mut output, "\nEnter your name: ")? else {
        return Ok(());
    };

    // Both accounts are opened up front and live for the whole session.
    let Some(checking) = console::open_checking(&name, &mut input, &mut output)? else {
        return Ok(());
    };
    let Some(cd) = console::open_certificate_of_deposit(&name, &mut input, &mut output)? else {
        return Ok(());
    };

    let mut session = Session::new(vec![checking, cd]);
    session.run(&mut input, &mut output)
}
