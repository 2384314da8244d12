//! Low-stock alert classification.

use stocklens_inventory::{Alert, AlertKind, AlertSeverity, InventoryItem};

/// Classify the urgency of an item's stock level.
///
/// The rule table, evaluated in integer arithmetic
/// (`2 × quantity ≤ reorder_level` is `quantity ≤ reorder_level / 2` without
/// losing the half-unit boundary):
///
/// - quantity = 0 → critical, whatever the reorder level
/// - 0 < quantity ≤ half the reorder level → high
/// - above half, up to the reorder level → medium
/// - above the reorder level → no alert
///
/// A negative on-hand count classifies as critical; the data-quality pass
/// reports it separately.
pub fn classify_low_stock(quantity: i64, reorder_level: i64) -> Option<AlertSeverity> {
    if quantity <= 0 {
        return Some(AlertSeverity::Critical);
    }
    if quantity.saturating_mul(2) <= reorder_level {
        return Some(AlertSeverity::High);
    }
    if quantity <= reorder_level {
        return Some(AlertSeverity::Medium);
    }
    None
}

/// Evaluate a snapshot, producing zero or one low-stock alert per item.
///
/// Alerts are fresh value objects every pass; deduplication against
/// previously raised alerts belongs to the external store (idempotent
/// upsert keyed by item + kind).
pub fn evaluate_low_stock(items: &[InventoryItem]) -> Vec<Alert> {
    items
        .iter()
        .filter_map(|item| {
            classify_low_stock(item.quantity, item.reorder_level).map(|severity| {
                let message = match severity {
                    AlertSeverity::Critical => format!("{} is out of stock", item.name),
                    AlertSeverity::High => format!(
                        "{} is running low ({} {} on hand, reorder at {})",
                        item.name, item.quantity, item.unit, item.reorder_level
                    ),
                    _ => format!(
                        "{} is at or below its reorder level ({}/{})",
                        item.name, item.quantity, item.reorder_level
                    ),
                };
                Alert::new(AlertKind::LowStock, severity, item.id, message)
            })
        })
        .collect()
}
