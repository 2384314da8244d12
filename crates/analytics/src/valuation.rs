//! Stock valuation and low-stock detection.

use serde::{Deserialize, Serialize};

use stocklens_core::{ItemId, Money};
use stocklens_inventory::InventoryItem;

/// A data-quality finding attached to a valuation pass.
///
/// Findings are reported, never corrected: the sum still uses the raw value
/// so the caller can decide remediation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityFlag {
    pub item_id: ItemId,
    pub problem: QualityProblem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityProblem {
    NegativeQuantity,
    NegativeUnitCost,
    NegativeReorderLevel,
}

/// Summary of one valuation pass over an item snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValuationSummary {
    pub total_items: usize,
    /// Σ quantity × unit_cost over the snapshot.
    pub total_value: Money,
    /// Items with quantity at or below their reorder level.
    pub low_stock_count: usize,
    pub quality_flags: Vec<QualityFlag>,
}

impl ValuationSummary {
    pub fn is_clean(&self) -> bool {
        self.quality_flags.is_empty()
    }
}

/// Compute total value, low-stock count and data-quality findings in one
/// pass. An empty snapshot yields the zero summary; it is not an error.
pub fn summarize(items: &[InventoryItem]) -> ValuationSummary {
    let mut summary = ValuationSummary {
        total_items: items.len(),
        ..ValuationSummary::default()
    };

    for item in items {
        summary.total_value = summary.total_value.saturating_add(item.stock_value());

        if item.is_low_stock() {
            summary.low_stock_count += 1;
        }

        if item.quantity < 0 {
            summary.quality_flags.push(QualityFlag {
                item_id: item.id,
                problem: QualityProblem::NegativeQuantity,
            });
        }
        if item.unit_cost.is_negative() {
            summary.quality_flags.push(QualityFlag {
                item_id: item.id,
                problem: QualityProblem::NegativeUnitCost,
            });
        }
        if item.reorder_level < 0 {
            summary.quality_flags.push(QualityFlag {
                item_id: item.id,
                problem: QualityProblem::NegativeReorderLevel,
            });
        }
    }

    summary
}
