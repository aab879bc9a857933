//! Loader for the promo-period summary table.
//!
//! Expected CSV columns:
//!   upc, Long_Desc, sale_period, promo_start, promo_end, promo_length,
//!   promo_revenue, preceding_non_promo_revenue, lift, promo_profit,
//!   preceding_non_promo_profit, profit_difference

use crate::error::LoadError;
use crate::parse::{deserialize_count, deserialize_date, deserialize_decimal};
use crate::reader::read_table;
use chrono::NaiveDate;
use core_types::PromoRecord;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

pub const PROMO_TABLE: &str = "promo-period";

const REQUIRED_COLUMNS: &[&str] = &[
    "upc",
    "Long_Desc",
    "sale_period",
    "promo_start",
    "promo_end",
    "promo_length",
    "promo_revenue",
    "preceding_non_promo_revenue",
    "lift",
    "promo_profit",
    "preceding_non_promo_profit",
    "profit_difference",
];

#[derive(Debug, Deserialize)]
struct PromoRow {
    upc: String,
    #[serde(rename = "Long_Desc")]
    item_name: String,
    #[serde(deserialize_with = "deserialize_count")]
    sale_period: u32,
    #[serde(deserialize_with = "deserialize_date")]
    promo_start: NaiveDate,
    #[serde(deserialize_with = "deserialize_date")]
    promo_end: NaiveDate,
    #[serde(deserialize_with = "deserialize_count")]
    promo_length: u32,
    #[serde(deserialize_with = "deserialize_decimal")]
    promo_revenue: Decimal,
    #[serde(deserialize_with = "deserialize_decimal")]
    preceding_non_promo_revenue: Decimal,
    #[serde(deserialize_with = "deserialize_decimal")]
    lift: Decimal,
    #[serde(deserialize_with = "deserialize_decimal")]
    promo_profit: Decimal,
    #[serde(deserialize_with = "deserialize_decimal")]
    preceding_non_promo_profit: Decimal,
    #[serde(deserialize_with = "deserialize_decimal")]
    profit_difference: Decimal,
}

impl From<PromoRow> for PromoRecord {
    fn from(row: PromoRow) -> Self {
        PromoRecord {
            upc: row.upc,
            item_name: row.item_name,
            sale_period: row.sale_period,
            promo_start: row.promo_start,
            promo_end: row.promo_end,
            promo_length: row.promo_length,
            promo_revenue: row.promo_revenue,
            preceding_non_promo_revenue: row.preceding_non_promo_revenue,
            lift: row.lift,
            promo_profit: row.promo_profit,
            preceding_non_promo_profit: row.preceding_non_promo_profit,
            profit_difference: row.profit_difference,
        }
    }
}

/// Load promo-period records from a CSV reader, preserving row order.
pub fn load_promo_periods<R: Read>(reader: R) -> Result<Vec<PromoRecord>, LoadError> {
    let rows: Vec<PromoRow> = read_table(reader, PROMO_TABLE, REQUIRED_COLUMNS)?;
    Ok(rows.into_iter().map(PromoRecord::from).collect())
}

/// Load promo-period records from a CSV file path.
pub fn load_promo_periods_file(path: &Path) -> Result<Vec<PromoRecord>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_promo_periods(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE_CSV: &str = "\
upc,Long_Desc,sale_period,promo_start,promo_end,promo_length,promo_revenue,preceding_non_promo_revenue,lift,promo_profit,preceding_non_promo_profit,profit_difference
123,Cola 12pk,1,2024-01-01,2024-01-07,7,1000,700,1.5,400,100,300
123,Cola 12pk,2,2024-02-01,2024-02-07,7.0,800,750,1.0,100,200,-100
456,Chips,1,03/01/2024,03/10/2024,10,250.50,300,0.8,20.25,70.25,-50
";

    #[test]
    fn load_sample_csv() {
        let records = load_promo_periods(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].upc, "123");
        assert_eq!(records[0].item_name, "Cola 12pk");
        assert_eq!(records[0].lift, dec!(1.5));
        assert_eq!(records[1].promo_length, 7);
        assert_eq!(records[1].profit_difference, dec!(-100));
        assert_eq!(records[2].promo_start, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(records[2].promo_revenue, dec!(250.50));
    }

    #[test]
    fn header_only_table_is_empty() {
        let header = SAMPLE_CSV.lines().next().unwrap();
        let records = load_promo_periods(header.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn missing_column_is_reported() {
        let csv_data = "upc,Long_Desc,sale_period\n123,Cola,1\n";
        let err = load_promo_periods(csv_data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingColumn { column: "promo_start", .. }
        ));
    }

    #[test]
    fn unparseable_date_is_fatal_with_line_number() {
        let bad = SAMPLE_CSV.replace("2024-02-01", "someday");
        let err = load_promo_periods(bad.as_bytes()).unwrap_err();
        match err {
            LoadError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn oversized_revenue_is_fatal() {
        let bad = SAMPLE_CSV.replace(",1000,700,", ",5e28,700,");
        let err = load_promo_periods(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { line: 2, .. }));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_promo_periods_file(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
