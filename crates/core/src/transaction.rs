use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::money::Money;

/// One row of a bank export. Never mutated after load; the cleaning pass
/// produces derived copies with a rewritten description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub amount: Money,
    pub description: String,
    pub account: Account,
}

impl Transaction {
    pub fn new(date: NaiveDate, amount: Money, description: &str, account: Account) -> Self {
        Transaction {
            date,
            amount,
            description: description.to_string(),
            account,
        }
    }

    /// Copy of this record with a different description.
    pub fn with_description(&self, description: String) -> Self {
        Transaction {
            description,
            ..self.clone()
        }
    }

    pub fn is_outflow(&self) -> bool {
        self.amount.is_negative()
    }
}
