//! Composite inventory report.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use stocklens_core::CategoryId;
use stocklens_inventory::{Category, InventoryItem, StockMovement};

use crate::movements::{count_since, recent_movements};
use crate::ranking::top_by_quantity;
use crate::rollup::{rollup_by_category, BucketTotals};
use crate::valuation::{summarize, ValuationSummary};

/// Everything the dashboard and reports surfaces derive from one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryReport {
    pub valuation: ValuationSummary,
    pub top_items: Vec<InventoryItem>,
    pub category_totals: HashMap<Option<CategoryId>, BucketTotals>,
    /// Movements at or after the `since` instant passed to [`build_report`].
    pub movement_count: usize,
    pub recent_movements: Vec<StockMovement>,
}

/// Compute valuation, ranking, category roll-up and movement statistics
/// over one immutable snapshot.
///
/// All constituents observe the same collections, so the report is
/// internally consistent (bucket totals reconcile with the valuation, the
/// ranking covers exactly the valued items).
pub fn build_report(
    items: &[InventoryItem],
    categories: &[Category],
    movements: &[StockMovement],
    since: DateTime<Utc>,
    top_n: usize,
    recent_limit: usize,
) -> InventoryReport {
    InventoryReport {
        valuation: summarize(items),
        top_items: top_by_quantity(items, top_n),
        category_totals: rollup_by_category(items, categories),
        movement_count: count_since(movements, since),
        recent_movements: recent_movements(movements, recent_limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stocklens_core::{ItemId, Money, MovementId, OrganizationId};
    use stocklens_inventory::{ItemStatus, MovementType};

    #[test]
    fn report_constituents_agree_with_each_other() {
        let org = OrganizationId::new();
        let category = Category {
            id: CategoryId::new(),
            organization_id: org,
            name: "Hardware".to_string(),
            color: "#f59e0b".to_string(),
            parent_id: None,
        };

        let mut items = Vec::new();
        for (sku, qty, cost) in [("A", 5i64, 200i64), ("B", 20, 150), ("C", 8, 75)] {
            let mut item = InventoryItem::new(
                ItemId::new(),
                org,
                sku,
                format!("Item {sku}"),
                qty,
                "pcs",
                Money::from_cents(cost),
                Money::from_cents(cost * 2),
                10,
                50,
                ItemStatus::Active,
            )
            .unwrap();
            item.category_id = Some(category.id);
            items.push(item);
        }

        let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let movements = vec![
            StockMovement::new(MovementId::new(), org, items[0].id, MovementType::Inbound, 5, t0)
                .unwrap(),
            StockMovement::new(
                MovementId::new(),
                org,
                items[1].id,
                MovementType::Outbound,
                2,
                t0 + chrono::Duration::days(10),
            )
            .unwrap(),
        ];

        let report = build_report(&items, &[category.clone()], &movements, t0, 2, 10);

        assert_eq!(report.valuation.total_items, 3);
        assert_eq!(report.top_items.len(), 2);
        assert_eq!(report.top_items[0].sku, "B");
        assert_eq!(report.movement_count, 2);
        assert_eq!(report.recent_movements.len(), 2);
        assert_eq!(report.recent_movements[0].kind, MovementType::Outbound);

        // Conservation between roll-up and valuation.
        let bucket_value = report
            .category_totals
            .values()
            .fold(Money::ZERO, |acc, b| acc.saturating_add(b.value));
        assert_eq!(bucket_value, report.valuation.total_value);
    }
}
