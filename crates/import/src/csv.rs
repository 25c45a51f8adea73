use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Read;
use std::str::FromStr;
use thiserror::Error;

use spendview_core::{Account, Money, Transaction};

use crate::settings::AccountSettings;

/// Column names carrying this prefix are discarded from the export.
pub const DROP_PREFIX: &str = "DROP";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Row {line}: expected {expected} columns, found {found}")]
    SchemaMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// Positions of the reserved column names within a configured schema.
struct ResolvedSchema {
    expected: usize,
    date: Option<usize>,
    amount: usize,
    description: Option<usize>,
}

fn resolve_schema(columns: &[String]) -> Result<ResolvedSchema, LoadError> {
    let index_of = |name: &str| columns.iter().position(|c| c == name);

    for name in columns {
        if !name.starts_with(DROP_PREFIX)
            && !matches!(name.as_str(), "Date" | "Amount" | "Description")
        {
            tracing::warn!("ignoring unrecognized column name: {name}");
        }
    }

    let date = index_of("Date");
    if date.is_none() {
        tracing::warn!("schema has no Date column; records will not be date-sorted");
    }
    let description = index_of("Description");
    if description.is_none() {
        tracing::warn!("schema has no Description column; descriptions will be empty");
    }
    let amount = index_of("Amount").ok_or_else(|| LoadError::MissingColumn("Amount".into()))?;

    Ok(ResolvedSchema {
        expected: columns.len(),
        date,
        amount,
        description,
    })
}

/// Read a headerless export whose column order matches the configured
/// schema. Records come back sorted ascending by date when the schema has
/// a `Date` column; without one they keep file order and carry a
/// placeholder date.
pub fn load_csv<R: Read>(
    data: R,
    settings: &AccountSettings,
    account: Account,
) -> Result<Vec<Transaction>, LoadError> {
    let schema = resolve_schema(&settings.columns)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(data);

    let mut transactions = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() != schema.expected {
            return Err(LoadError::SchemaMismatch {
                line: row + 1,
                expected: schema.expected,
                found: record.len(),
            });
        }

        let date = match schema.date {
            Some(col) => parse_date(&record[col], &settings.date_format)?,
            None => placeholder_date(),
        };
        let amount = parse_amount(&record[schema.amount])?;
        let description = schema
            .description
            .map(|col| record[col].to_string())
            .unwrap_or_default();

        transactions.push(Transaction {
            date,
            amount,
            description,
            account,
        });
    }

    if schema.date.is_some() {
        transactions.sort_by_key(|tx| tx.date);
    }

    Ok(transactions)
}

/// Open and load the export named in the account settings.
pub fn load_file(
    settings: &AccountSettings,
    account: Account,
) -> Result<Vec<Transaction>, LoadError> {
    tracing::info!(path = %settings.path.display(), %account, "loading export");
    let file = File::open(&settings.path)?;
    load_csv(file, settings, account)
}

fn parse_date(s: &str, format: &str) -> Result<NaiveDate, LoadError> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, format) {
        return Ok(date);
    }

    for fmt in &[
        "%m/%d/%Y", "%d/%m/%Y", "%Y/%m/%d", "%m-%d-%Y", "%d-%m-%Y", "%Y-%m-%d",
    ] {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }

    Err(LoadError::InvalidDate(s.to_string()))
}

fn parse_amount(s: &str) -> Result<Money, LoadError> {
    let s = s.trim();
    let (negative, s) = if s.starts_with('(') && s.ends_with(')') {
        (true, &s[1..s.len() - 1])
    } else {
        (false, s)
    };
    let s = s.replace([',', '$', ' '], "");
    let mut dec = Decimal::from_str(&s).map_err(|_| LoadError::InvalidAmount(s.to_string()))?;
    if negative {
        dec = -dec;
    }
    Ok(Money::from_decimal(dec))
}

/// Stand-in for exports whose schema names no Date column. The chart
/// degrades (everything lands on one day) instead of the load failing.
fn placeholder_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checking_settings(columns: &[&str]) -> AccountSettings {
        AccountSettings {
            path: "Checking1.csv".into(),
            columns: columns.iter().map(|s| s.to_string()).collect(),
            date_format: "%m/%d/%Y".to_string(),
            noise_patterns: vec![],
            categories: vec![],
        }
    }

    // ── parse_amount ──────────────────────────────────────────────────────────

    #[test]
    fn parse_amount_plain() {
        assert_eq!(parse_amount("123.45").unwrap(), Money::from_cents(12345));
    }

    #[test]
    fn parse_amount_with_dollar_sign_and_commas() {
        assert_eq!(parse_amount("$1,234.56").unwrap(), Money::from_cents(123456));
    }

    #[test]
    fn parse_amount_negative() {
        assert_eq!(parse_amount("-50.00").unwrap(), Money::from_cents(-5000));
    }

    #[test]
    fn parse_amount_accounting_parens() {
        assert_eq!(parse_amount("(75.25)").unwrap(), Money::from_cents(-7525));
    }

    #[test]
    fn parse_amount_invalid() {
        assert!(parse_amount("not_a_number").is_err());
        assert!(parse_amount("").is_err());
    }

    // ── parse_date ────────────────────────────────────────────────────────────

    #[test]
    fn parse_date_configured_format() {
        let d = parse_date("01/15/2024", "%m/%d/%Y").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn parse_date_falls_back_to_iso() {
        let d = parse_date("2024-01-15", "%m/%d/%Y").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn parse_date_invalid() {
        assert!(parse_date("not-a-date", "%m/%d/%Y").is_err());
    }

    // ── load_csv ──────────────────────────────────────────────────────────────

    #[test]
    fn loads_and_sorts_by_date() {
        let data = b"\"01/06/2024\",\"-900.00\",\"*\",\"*\",\"Penn State Apt Rent\"\n\
                     \"01/05/2024\",\"-12.50\",\"*\",\"*\",\"COFFEE SHOP\"\n";
        let settings = checking_settings(&["Date", "Amount", "DROP", "DROP2", "Description"]);
        let txs = load_csv(data.as_ref(), &settings, Account::Checking).unwrap();
        assert_eq!(txs.len(), 2);
        assert_eq!(txs[0].description, "COFFEE SHOP");
        assert_eq!(txs[0].amount, Money::from_cents(-1250));
        assert_eq!(txs[1].description, "Penn State Apt Rent");
        assert!(txs[0].date < txs[1].date);
    }

    #[test]
    fn drop_columns_are_discarded() {
        // "DROPAmount" must not shadow the real Amount column.
        let data = b"01/05/2024,ignored,-12.50,COFFEE SHOP\n";
        let settings = checking_settings(&["Date", "DROPAmount", "Amount", "Description"]);
        let txs = load_csv(data.as_ref(), &settings, Account::Checking).unwrap();
        assert_eq!(txs[0].amount, Money::from_cents(-1250));
        assert_eq!(txs[0].description, "COFFEE SHOP");
    }

    #[test]
    fn column_count_mismatch_is_fatal() {
        let data = b"01/05/2024,-12.50\n";
        let settings = checking_settings(&["Date", "Amount", "Description"]);
        let result = load_csv(data.as_ref(), &settings, Account::Checking);
        assert!(matches!(
            result,
            Err(LoadError::SchemaMismatch {
                line: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn malformed_date_is_fatal() {
        let data = b"garbage,-12.50,COFFEE SHOP\n";
        let settings = checking_settings(&["Date", "Amount", "Description"]);
        let result = load_csv(data.as_ref(), &settings, Account::Checking);
        assert!(matches!(result, Err(LoadError::InvalidDate(_))));
    }

    #[test]
    fn missing_amount_column_is_fatal() {
        let settings = checking_settings(&["Date", "Description"]);
        let result = load_csv(b"".as_ref(), &settings, Account::Checking);
        assert!(matches!(result, Err(LoadError::MissingColumn(_))));
    }

    #[test]
    fn no_date_column_keeps_file_order() {
        let data = b"-900.00,Rent\n-12.50,COFFEE SHOP\n";
        let settings = checking_settings(&["Amount", "Description"]);
        let txs = load_csv(data.as_ref(), &settings, Account::Checking).unwrap();
        assert_eq!(txs[0].description, "Rent");
        assert_eq!(txs[1].description, "COFFEE SHOP");
        assert_eq!(txs[0].date, txs[1].date); // placeholder
    }

    #[test]
    fn no_description_column_yields_empty_descriptions() {
        let data = b"01/05/2024,-12.50\n";
        let settings = checking_settings(&["Date", "Amount"]);
        let txs = load_csv(data.as_ref(), &settings, Account::Checking).unwrap();
        assert_eq!(txs[0].description, "");
    }

    #[test]
    fn missing_file_is_fatal() {
        let settings = AccountSettings {
            path: "/nonexistent/Checking1.csv".into(),
            ..checking_settings(&["Date", "Amount", "Description"])
        };
        assert!(matches!(
            load_file(&settings, Account::Checking),
            Err(LoadError::Io(_))
        ));
    }

    #[test]
    fn empty_export_loads_as_empty() {
        let settings = checking_settings(&["Date", "Amount", "Description"]);
        let txs = load_csv(b"".as_ref(), &settings, Account::Checking).unwrap();
        assert!(txs.is_empty());
    }

    #[test]
    fn sort_is_stable_within_a_day() {
        let data = b"01/05/2024,-1.00,first\n01/05/2024,-2.00,second\n";
        let settings = checking_settings(&["Date", "Amount", "Description"]);
        let txs = load_csv(data.as_ref(), &settings, Account::Checking).unwrap();
        assert_eq!(txs[0].description, "first");
        assert_eq!(txs[1].description, "second");
    }
}
