use std::fmt::{self, Display};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::TrackerError;
use crate::money::format_currency;

const DATE_FORMAT: &str = "%m/%d/%Y";

/**
 * Opening dates come in as user-typed MM/DD/YYYY strings (unpadded months
 * and days accepted) and are stored as real calendar dates. Formatting back
 * to the padded form happens only at render time.
 */
pub fn parse_opening_date(input: &str) -> Result<NaiveDate, TrackerError> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| TrackerError::InvalidDate)
}

#[derive(Debug, Clone, PartialEq)]
pub enum InvestmentKind {
    Checking { overdraft_fee: Decimal },
    CertificateOfDeposit { interest_rate: Decimal },
}

/**
 * One bank-held investment product. Identity fields never change after
 * construction and the balance moves only through deposit, withdraw and
 * apply_adjustment.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Investment {
    customer_name: String,
    id: String,
    opening_date: NaiveDate,
    balance: Decimal,
    kind: InvestmentKind,
}

impl Investment {
    pub fn checking(
        customer_name: &str,
        id: &str,
        opening_date: &str,
        balance: Decimal,
        overdraft_fee: Decimal,
    ) -> Result<Self, TrackerError> {
        Self::new(
            customer_name,
            id,
            opening_date,
            balance,
            InvestmentKind::Checking { overdraft_fee },
        )
    }

    pub fn certificate_of_deposit(
        customer_name: &str,
        id: &str,
        opening_date: &str,
        balance: Decimal,
        interest_rate: Decimal,
    ) -> Result<Self, TrackerError> {
        Self::new(
            customer_name,
            id,
            opening_date,
            balance,
            InvestmentKind::CertificateOfDeposit { interest_rate },
        )
    }

    /**
     * The starting balance is stored verbatim, negative values included.
     * Only the opening date is validated here.
     */
    fn new(
        customer_name: &str,
        id: &str,
        opening_date: &str,
        balance: Decimal,
        kind: InvestmentKind,
    ) -> Result<Self, TrackerError> {
        Ok(Investment {
            customer_name: customer_name.to_string(),
            id: id.to_string(),
            opening_date: parse_opening_date(opening_date)?,
            balance,
            kind,
        })
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            InvestmentKind::Checking { .. } => "Checking",
            InvestmentKind::CertificateOfDeposit { .. } => "CD",
        }
    }

    pub fn is_checking(&self) -> bool {
        matches!(self.kind, InvestmentKind::Checking { .. })
    }

    /**
     * Negative deposits are accepted; the surrounding prompts are the only
     * gatekeeper there is.
     */
    pub fn deposit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    /**
     * The funds always move, even past zero. Returns true when the
     * resulting balance is negative so the caller can surface the
     * overdraft warning.
     */
    #[must_use]
    pub fn withdraw(&mut self, amount: Decimal) -> bool {
        let overdrawn = self.balance - amount < Decimal::ZERO;
        self.balance -= amount;
        overdrawn
    }

    /**
     * Periodic adjustment: checking accounts charge the overdraft fee once
     * while overdrawn (no floor), CDs accrue interest unconditionally and
     * compound across calls.
     */
    pub fn apply_adjustment(&mut self) {
        match self.kind {
            InvestmentKind::Checking { overdraft_fee } => {
                if self.balance < Decimal::ZERO {
                    self.balance -= overdraft_fee;
                }
            }
            InvestmentKind::CertificateOfDeposit { interest_rate } => {
                self.balance += self.balance * interest_rate / Decimal::ONE_HUNDRED;
            }
        }
    }
}

impl Display for Investment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Type={}, ID={}, Name of Holder={}, Opening Date={}, Balance={}",
            self.kind_name(),
            self.id,
            self.customer_name,
            self.opening_date.format(DATE_FORMAT),
            format_currency(self.balance)
        )?;
        match self.kind {
            InvestmentKind::Checking { overdraft_fee } => {
                write!(f, ", Overdraft Fee={}", format_currency(overdraft_fee))
            }
            InvestmentKind::CertificateOfDeposit { interest_rate } => {
                write!(f, ", Interest Rate={:.2}%", interest_rate)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_checking(balance: Decimal) -> Investment {
        Investment::checking("Alice", "C1", "01/01/2024", balance, dec!(25.00)).unwrap()
    }

    fn sample_cd(balance: Decimal) -> Investment {
        Investment::certificate_of_deposit("Alice", "D1", "01/01/2024", balance, dec!(5.00))
            .unwrap()
    }

    mod construction {
        use super::*;

        #[test]
        fn rejects_nonsense_date() {
            let result = Investment::checking("Alice", "C1", "hello", dec!(0), dec!(25.00));
            assert!(matches!(result, Err(TrackerError::InvalidDate)));
        }

        #[test]
        fn rejects_out_of_range_date() {
            let result = Investment::checking("Alice", "C1", "13/45/2024", dec!(0), dec!(25.00));
            assert!(matches!(result, Err(TrackerError::InvalidDate)));
        }

        #[test]
        fn accepts_unpadded_date_fields() {
            let account =
                Investment::checking("Alice", "C1", "1/5/2024", dec!(0), dec!(25.00)).unwrap();
            assert_eq!(
                account.opening_date,
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
            );
        }

        #[test]
        fn negative_starting_balance_is_stored_verbatim() {
            let account = sample_checking(dec!(-10.00));
            assert_eq!(account.balance, dec!(-10.00));
        }
    }

    mod deposits {
        use super::*;

        #[test]
        fn deposit_adds_exact_amount() {
            let mut account = sample_checking(dec!(100.00));
            account.deposit(dec!(32.50));
            assert_eq!(account.balance, dec!(132.50));
        }

        #[test]
        fn repeated_small_deposits_do_not_drift() {
            let mut account = sample_checking(dec!(0));
            for _ in 0..10 {
                account.deposit(dec!(0.10));
            }
            assert_eq!(account.balance, dec!(1.00));
        }

        #[test]
        fn negative_deposit_is_permitted() {
            let mut account = sample_checking(dec!(100.00));
            account.deposit(dec!(-20.00));
            assert_eq!(account.balance, dec!(80.00));
        }
    }

    mod withdrawals {
        use super::*;

        #[test]
        fn withdraw_subtracts_exact_amount() {
            let mut account = sample_checking(dec!(100.00));
            let overdrawn = account.withdraw(dec!(40.00));
            assert!(!overdrawn);
            assert_eq!(account.balance, dec!(60.00));
        }

        #[test]
        fn withdraw_to_exactly_zero_does_not_warn() {
            let mut account = sample_checking(dec!(100.00));
            let overdrawn = account.withdraw(dec!(100.00));
            assert!(!overdrawn);
            assert_eq!(account.balance, dec!(0.00));
        }

        #[test]
        fn withdraw_past_zero_proceeds_and_warns() {
            let mut account = sample_checking(dec!(100.00));
            let overdrawn = account.withdraw(dec!(150.00));
            assert!(overdrawn);
            assert_eq!(account.balance, dec!(-50.00));
        }

        #[test]
        fn negative_withdrawal_is_permitted() {
            let mut account = sample_checking(dec!(100.00));
            let overdrawn = account.withdraw(dec!(-25.00));
            assert!(!overdrawn);
            assert_eq!(account.balance, dec!(125.00));
        }
    }

    mod adjustments {
        use super::*;

        #[test]
        fn checking_adjustment_is_noop_at_positive_balance() {
            let mut account = sample_checking(dec!(100.00));
            account.apply_adjustment();
            assert_eq!(account.balance, dec!(100.00));
        }

        #[test]
        fn checking_adjustment_is_noop_at_zero_balance() {
            let mut account = sample_checking(dec!(0.00));
            account.apply_adjustment();
            assert_eq!(account.balance, dec!(0.00));
        }

        #[test]
        fn checking_adjustment_charges_fee_once_while_overdrawn() {
            let mut account = sample_checking(dec!(-50.00));
            account.apply_adjustment();
            assert_eq!(account.balance, dec!(-75.00));
        }

        #[test]
        fn checking_fee_has_no_floor() {
            let mut account = sample_checking(dec!(-50.00));
            account.apply_adjustment();
            account.apply_adjustment();
            account.apply_adjustment();
            assert_eq!(account.balance, dec!(-125.00));
        }

        #[test]
        fn cd_adjustment_accrues_interest() {
            let mut account = sample_cd(dec!(1000.00));
            account.apply_adjustment();
            assert_eq!(account.balance, dec!(1050.00));
        }

        #[test]
        fn cd_adjustment_compounds() {
            let mut account = sample_cd(dec!(1000.00));
            account.apply_adjustment();
            account.apply_adjustment();
            assert_eq!(account.balance, dec!(1102.50));
        }

        #[test]
        fn cd_accrues_even_on_negative_balance() {
            let mut account = sample_cd(dec!(-100.00));
            account.apply_adjustment();
            assert_eq!(account.balance, dec!(-105.00));
        }

        #[test]
        fn cd_adjustment_at_zero_stays_zero() {
            let mut account = sample_cd(dec!(0.00));
            account.apply_adjustment();
            assert_eq!(account.balance, dec!(0.00));
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn checking_renders_all_fields() {
            let account = sample_checking(dec!(100.00));
            assert_eq!(
                account.to_string(),
                "Type=Checking, ID=C1, Name of Holder=Alice, Opening Date=01/01/2024, \
                 Balance=$100.00, Overdraft Fee=$25.00"
            );
        }

        #[test]
        fn cd_renders_all_fields() {
            let account = sample_cd(dec!(1000.00));
            assert_eq!(
                account.to_string(),
                "Type=CD, ID=D1, Name of Holder=Alice, Opening Date=01/01/2024, \
                 Balance=$1000.00, Interest Rate=5.00%"
            );
        }

        #[test]
        fn unpadded_input_date_renders_padded() {
            let account =
                Investment::checking("Alice", "C1", "1/5/2024", dec!(0), dec!(25.00)).unwrap();
            assert!(account.to_string().contains("Opening Date=01/05/2024"));
        }

        #[test]
        fn negative_balance_renders_signed() {
            let account = sample_checking(dec!(-50.00));
            assert!(account.to_string().contains("Balance=$-50.00"));
        }
    }
}
