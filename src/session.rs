use std::io::{BufRead, Write};
use std::str::FromStr;

use log::warn;

use crate::account::Investment;
use crate::console;
use crate::error::{Result, TrackerError};
use crate::money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Withdraw,
    Deposit,
    Adjust,
    List,
    Quit,
}

impl FromStr for Command {
    type Err = TrackerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Command::Withdraw),
            "2" => Ok(Command::Deposit),
            "3" => Ok(Command::Adjust),
            "4" => Ok(Command::List),
            "5" => Ok(Command::Quit),
            _ => Err(TrackerError::InvalidChoice),
        }
    }
}

/**
 * One customer's menu loop over an ordered collection of investments.
 * Withdraw and deposit go to the first checking account; adjustment and
 * listing walk the whole collection in creation order.
 */
pub struct Session {
    investments: Vec<Investment>,
}

impl Session {
    pub fn new(investments: Vec<Investment>) -> Self {
        Session { investments }
    }

    /**
     * The command loop. Every recoverable error is reported and control
     * returns to the menu; only quit or exhausted input ends the loop.
     */
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            write_menu(output)?;
            let Some(choice) = console::read_line(input)? else {
                return Ok(());
            };
            match choice.parse::<Command>() {
                Ok(Command::Withdraw) => {
                    let Some(line) =
                        console::prompt(input, output, "How much do you want to withdraw? ")?
                    else {
                        return Ok(());
                    };
                    match money::parse_amount(&line) {
                        Ok(amount) => match self.checking_mut() {
                            Some(checking) => {
                                if checking.withdraw(amount) {
                                    writeln!(
                                        output,
                                        "Warning: This transaction will result in an overdraft!"
                                    )?;
                                }
                            }
                            None => writeln!(output, "No checking account is open.")?,
                        },
                        Err(err) => {
                            warn!("rejected withdrawal amount {:?}", line);
                            writeln!(output, "{}", err)?;
                        }
                    }
                }
                Ok(Command::Deposit) => {
                    let Some(line) =
                        console::prompt(input, output, "How much do you want to deposit? ")?
                    else {
                        return Ok(());
                    };
                    match money::parse_amount(&line) {
                        Ok(amount) => match self.checking_mut() {
                            Some(checking) => checking.deposit(amount),
                            None => writeln!(output, "No checking account is open.")?,
                        },
                        Err(err) => {
                            warn!("rejected deposit amount {:?}", line);
                            writeln!(output, "{}", err)?;
                        }
                    }
                }
                Ok(Command::Adjust) => {
                    for investment in &mut self.investments {
                        investment.apply_adjustment();
                    }
                    writeln!(
                        output,
                        "The CD accrued interest, and the checking account applied late fees if applicable."
                    )?;
                }
                Ok(Command::List) => {
                    writeln!(output, "Here are your investments at our bank:")?;
                    for investment in &self.investments {
                        writeln!(output, "{}", investment)?;
                    }
                }
                Ok(Command::Quit) => return Ok(()),
                Err(err) => {
                    warn!("rejected menu choice {:?}", choice);
                    writeln!(output, "{}", err)?;
                }
            }
        }
    }

    fn checking_mut(&mut self) -> Option<&mut Investment> {
        self.investments
            .iter_mut()
            .find(|investment| investment.is_checking())
    }
}

fn write_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "What would you like to do?")?;
    writeln!(output, "1. Withdraw from checking")?;
    writeln!(output, "2. Deposit into checking")?;
    writeln!(output, "3. Update balances")?;
    writeln!(output, "4. List investments")?;
    writeln!(output, "5. Quit")?;
    write!(output, "Enter the number of your choice: ")?;
    output.flush()?;
    Ok(())
}
