//! Loader for the per-day sales table.
//!
//! Expected CSV columns:
//!   Long_Desc, SaleDate, ItemsSold, Curr_Price, RegRetail
//! plus an optional `upc` (or `UPC`) item identifier.

use crate::error::LoadError;
use crate::parse::{deserialize_date, deserialize_decimal, deserialize_optional_id};
use crate::reader::read_table;
use chrono::NaiveDate;
use core_types::SalesRecord;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

pub const SALES_TABLE: &str = "sales";

const REQUIRED_COLUMNS: &[&str] = &["Long_Desc", "SaleDate", "ItemsSold", "Curr_Price", "RegRetail"];

#[derive(Debug, Deserialize)]
struct SalesRow {
    #[serde(default, alias = "UPC", deserialize_with = "deserialize_optional_id")]
    upc: Option<String>,
    #[serde(rename = "Long_Desc")]
    item_name: String,
    #[serde(rename = "SaleDate", deserialize_with = "deserialize_date")]
    sale_date: NaiveDate,
    #[serde(rename = "ItemsSold", deserialize_with = "deserialize_decimal")]
    items_sold: Decimal,
    #[serde(rename = "Curr_Price", deserialize_with = "deserialize_decimal")]
    current_price: Decimal,
    #[serde(rename = "RegRetail", deserialize_with = "deserialize_decimal")]
    regular_price: Decimal,
}

impl From<SalesRow> for SalesRecord {
    fn from(row: SalesRow) -> Self {
        SalesRecord {
            upc: row.upc,
            item_name: row.item_name,
            sale_date: row.sale_date,
            items_sold: row.items_sold,
            current_price: row.current_price,
            regular_price: row.regular_price,
        }
    }
}

/// Load daily sales records from a CSV reader, preserving row order.
pub fn load_sales<R: Read>(reader: R) -> Result<Vec<SalesRecord>, LoadError> {
    let rows: Vec<SalesRow> = read_table(reader, SALES_TABLE, REQUIRED_COLUMNS)?;
    Ok(rows.into_iter().map(SalesRecord::from).collect())
}

/// Load daily sales records from a CSV file path.
pub fn load_sales_file(path: &Path) -> Result<Vec<SalesRecord>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_sales(file)
}
