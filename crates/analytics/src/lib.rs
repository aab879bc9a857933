//! # Promo Analytics Engine
//!
//! This crate turns raw promotion rows into per-item summaries, quadrant
//! classifications and merchandising recommendations.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files or
//!   configuration. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** Every operation is a function of its inputs. Empty
//!   inputs produce empty outputs or an explicit no-data value, never an error.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: groups promo records into `ItemAggregate`s.
//! - `classify`: the ordered quadrant rules.
//! - `recommend`: advice for an item's most recent promotion.
//! - `format_money` / `format_lift`: display conventions shared by all outputs.

// Declare the modules that constitute this crate.
pub mod classifier;
pub mod engine;
pub mod format;
pub mod recommendation;
pub mod report;

// Re-export the key components to create a clean, public-facing API.
pub use classifier::{LIFT_THRESHOLD, QUADRANT_RULES, classify};
pub use engine::{AnalyticsEngine, max_promo_count};
pub use format::{format_lift, format_money};
pub use recommendation::{NO_PROMOTIONS_MESSAGE, Recommendation, recommend};
pub use report::{AxisDomain, ItemAggregate};
