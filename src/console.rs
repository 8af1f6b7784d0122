use std::io::{BufRead, Write};

use log::warn;
use rust_decimal::Decimal;

use crate::account::{self, Investment};
use crate::error::Result;
use crate::money;

/**
 * Terminal plumbing. Everything is generic over BufRead/Write so the
 * account-opening flows run against scripted input in tests exactly as
 * they do against stdin.
 */

pub fn print_banner<W: Write>(output: &mut W) -> Result<()> {
    writeln!(
        output,
        "************************************************************"
    )?;
    writeln!(output, "               INVESTMENT TRACKER VERSION 1.0")?;
    writeln!(
        output,
        "************************************************************"
    )?;
    writeln!(output)?;
    writeln!(
        output,
        "This tool helps you manage your investments, both CDs and checking accounts."
    )?;
    writeln!(
        output,
        "CDs accrue interest and checking accounts can have overdraft fees."
    )?;
    Ok(())
}

/// Reads one line, trimmed. None means the input stream is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;
    read_line(input)
}

/**
 * Re-prompts until the line parses as a real calendar date, then hands the
 * accepted string back so the account constructor performs the
 * authoritative parse.
 */
fn prompt_opening_date<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    loop {
        let Some(line) = prompt(input, output, text)? else {
            return Ok(None);
        };
        match account::parse_opening_date(&line) {
            Ok(_) => return Ok(Some(line)),
            Err(err) => {
                warn!("rejected opening date {:?}", line);
                writeln!(output, "{}", err)?;
            }
        }
    }
}

fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<Decimal>> {
    loop {
        let Some(line) = prompt(input, output, text)? else {
            return Ok(None);
        };
        match money::parse_amount(&line) {
            Ok(amount) => return Ok(Some(amount)),
            Err(err) => {
                warn!("rejected amount {:?}", line);
                writeln!(output, "{}", err)?;
            }
        }
    }
}

/// None means the user hung up mid-opening; the caller quits cleanly.
pub fn open_checking<R: BufRead, W: Write>(
    customer_name: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Investment>> {
    writeln!(output)?;
    writeln!(output, "Let's open your checking account.")?;
    let Some(id) = prompt(input, output, "Enter the account ID: ")? else {
        return Ok(None);
    };
    let Some(date) = prompt_opening_date(input, output, "Enter the opening date (MM/DD/YYYY): ")?
    else {
        return Ok(None);
    };
    let Some(balance) = prompt_amount(input, output, "Enter the starting balance: ")? else {
        return Ok(None);
    };
    let Some(fee) = prompt_amount(input, output, "Enter the overdraft fee: ")? else {
        return Ok(None);
    };
    Ok(Some(Investment::checking(
        customer_name,
        &id,
        &date,
        balance,
        fee,
    )?))
}

pub fn open_certificate_of_deposit<R: BufRead, W: Write>(
    customer_name: &str,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Investment>> {
    writeln!(output)?;
    writeln!(output, "Now let's open your CD.")?;
    let Some(id) = prompt(input, output, "Enter the account ID: ")? else {
        return Ok(None);
    };
    let Some(date) = prompt_opening_date(input, output, "Enter the opening date (MM/DD/YYYY): ")?
    else {
        return Ok(None);
    };
    let Some(balance) = prompt_amount(input, output, "Enter the starting balance: ")? else {
        return Ok(None);
    };
    let Some(rate) = prompt_amount(input, output, "Enter the annual interest rate (%): ")? else {
        return Ok(None);
    };
    Ok(Some(Investment::certificate_of_deposit(
        customer_name,
        &id,
        &date,
        balance,
        rate,
    )?))
}
