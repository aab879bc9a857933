//! # Promo Dataset Loader
//!
//! Reads the promo-period summary and the per-day sales table into typed,
//! immutable records. A failure to open or parse either file is fatal; an
//! empty table is not.
//!
//! ## Public API
//!
//! - `Dataset`: both tables, loaded once and read-only afterwards.
//! - `load_promo_periods` / `load_sales`: reader-level loaders.
//! - `LoadError`: every way loading can fail.

pub mod error;
mod parse;
pub mod promo;
mod reader;
pub mod sales;

pub use error::LoadError;
pub use promo::{load_promo_periods, load_promo_periods_file};
pub use sales::{load_sales, load_sales_file};

use configuration::DataSettings;
use core_types::{JoinKey, PromoRecord, SalesRecord};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// A display name in the promo table that is shared by several UPCs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCollision {
    pub item_name: String,
    pub upcs: Vec<String>,
}

/// The two input tables, held immutably for the lifetime of one run.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    promotions: Vec<PromoRecord>,
    sales: Vec<SalesRecord>,
}

impl Dataset {
    pub fn new(promotions: Vec<PromoRecord>, sales: Vec<SalesRecord>) -> Self {
        Self { promotions, sales }
    }

    /// Loads both tables from the configured paths.
    pub fn load(settings: &DataSettings) -> Result<Self, LoadError> {
        let promotions = load_promo_periods_file(&settings.promo_periods_path)?;
        let sales = load_sales_file(&settings.sales_path)?;
        tracing::info!(
            promotions = promotions.len(),
            sales = sales.len(),
            "Loaded promo and sales tables."
        );

        let dataset = Self::new(promotions, sales);
        for collision in dataset.name_collisions() {
            tracing::warn!(
                item = %collision.item_name,
                upcs = ?collision.upcs,
                "Display name is shared by several UPCs; name-based joins will merge them."
            );
        }
        Ok(dataset)
    }

    pub fn promotions(&self) -> &[PromoRecord] {
        &self.promotions
    }

    pub fn sales(&self) -> &[SalesRecord] {
        &self.sales
    }

    /// The sorted, distinct, non-empty item names in the sales table.
    pub fn item_names(&self) -> Vec<String> {
        self.sales
            .iter()
            .map(|s| s.item_name.as_str())
            .filter(|name| !name.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// The promotion rows for the selected sales item, in table order.
    pub fn promotions_for(&self, item_name: &str, join_key: JoinKey) -> Vec<PromoRecord> {
        match join_key {
            JoinKey::DisplayName => self
                .promotions
                .iter()
                .filter(|p| p.item_name == item_name)
                .cloned()
                .collect(),
            JoinKey::Upc => {
                let upcs: HashSet<&str> = self
                    .sales
                    .iter()
                    .filter(|s| s.item_name == item_name)
                    .filter_map(|s| s.upc.as_deref())
                    .collect();
                if upcs.is_empty() {
                    tracing::warn!(
                        item = %item_name,
                        "No UPC found in the sales table for this item; cannot join promotions by UPC."
                    );
                    return Vec::new();
                }
                self.promotions
                    .iter()
                    .filter(|p| upcs.contains(p.upc.as_str()))
                    .cloned()
                    .collect()
            }
        }
    }

    /// The daily sales rows for the selected item, sorted by date.
    pub fn sales_for(&self, item_name: &str) -> Vec<SalesRecord> {
        let mut rows: Vec<SalesRecord> = self
            .sales
            .iter()
            .filter(|s| s.item_name == item_name)
            .cloned()
            .collect();
        rows.sort_by_key(|s| s.sale_date);
        rows
    }

    /// Display names in the promo table that map to more than one UPC.
    pub fn name_collisions(&self) -> Vec<NameCollision> {
        let mut by_name: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
        for promo in &self.promotions {
            by_name
                .entry(promo.item_name.as_str())
                .or_default()
                .insert(promo.upc.as_str());
        }
        by_name
            .into_iter()
            .filter(|(_, upcs)| upcs.len() > 1)
            .map(|(name, upcs)| NameCollision {
                item_name: name.to_string(),
                upcs: upcs.into_iter().map(str::to_string).collect(),
            })
            .collect()
    }
}
