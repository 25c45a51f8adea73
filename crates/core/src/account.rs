use serde::{Deserialize, Serialize};
use std::fmt;

/// The two export sources the dashboard knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Account {
    Checking,
    Savings,
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Account::Checking => write!(f, "checking"),
            Account::Savings => write!(f, "savings"),
        }
    }
}

impl std::str::FromStr for Account {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "checking" => Ok(Account::Checking),
            "savings" => Ok(Account::Savings),
            other => Err(format!("Unknown account type: '{other}'")),
        }
    }
}
