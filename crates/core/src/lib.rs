pub mod account;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use money::Money;
pub use transaction::Transaction;
