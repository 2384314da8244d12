//! Inventory analytics engine.
//!
//! Deterministic aggregations over an immutable inventory snapshot: stock
//! valuation, low-stock detection, top-N ranking, category/supplier
//! roll-ups, alert classification, movement statistics, and CSV export.
//!
//! Everything here is a pure function over already-materialized collections:
//! no IO, no shared mutable state, no caching across calls. Within one
//! invocation every aggregation observes the same snapshot; callers that
//! recompute on live-update pushes debounce themselves.

pub mod alerts;
pub mod export;
pub mod movements;
pub mod ranking;
pub mod report;
pub mod rollup;
pub mod valuation;

pub use alerts::{classify_low_stock, evaluate_low_stock};
pub use export::items_to_csv;
pub use movements::{count_since, project_quantity, recent_movements, DEFAULT_RECENT_LIMIT};
pub use ranking::{top_by_quantity, DEFAULT_TOP_N};
pub use report::{build_report, InventoryReport};
pub use rollup::{category_rows, rollup_by_category, rollup_by_supplier, BucketTotals, CategoryRow};
pub use valuation::{summarize, QualityFlag, QualityProblem, ValuationSummary};
