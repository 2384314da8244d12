//! Top-N ranking by stock quantity.

use stocklens_inventory::InventoryItem;

/// Default ranking depth used by the dashboard surfaces.
pub const DEFAULT_TOP_N: usize = 5;

/// The `n` items with the highest quantity.
///
/// Quantity descending; ties break by SKU ascending so the order is total
/// and reproducible. `n = 0` yields an empty list; `n` beyond the input
/// length yields every item, no padding.
pub fn top_by_quantity(items: &[InventoryItem], n: usize) -> Vec<InventoryItem> {
    let mut ranked = items.to_vec();
    ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.sku.cmp(&b.sku)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocklens_core::{ItemId, Money, OrganizationId};
    use stocklens_inventory::ItemStatus;

    fn test_item(sku: &str, quantity: i64) -> InventoryItem {
        InventoryItem::new(
            ItemId::new(),
            OrganizationId::new(),
            sku,
            format!("Item {sku}"),
            quantity,
            "pcs",
            Money::from_cents(100),
            Money::from_cents(200),
            10,
            50,
            ItemStatus::Active,
        )
        .unwrap()
    }

    #[test]
    fn ranks_by_quantity_descending() {
        let items = vec![test_item("A", 5), test_item("B", 20), test_item("C", 12)];
        let top = top_by_quantity(&items, 2);
        let skus: Vec<&str> = top.iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(skus, ["B", "C"]);
    }

    #[test]
    fn ties_break_by_sku_ascending() {
        let items = vec![test_item("Z", 7), test_item("A", 7), test_item("M", 7)];
        let top = top_by_quantity(&items, 3);
        let skus: Vec<&str> = top.iter().map(|i| i.sku.as_str()).collect();
        assert_eq!(skus, ["A", "M", "Z"]);
    }

    #[test]
    fn zero_n_yields_empty() {
        let items = vec![test_item("A", 5)];
        assert!(top_by_quantity(&items, 0).is_empty());
    }

    #[test]
    fn n_beyond_length_yields_all_items() {
        let items = vec![test_item("A", 5), test_item("B", 20)];
        assert_eq!(top_by_quantity(&items, 99).len(), 2);
    }

    #[test]
    fn ranking_is_idempotent() {
        let items = vec![
            test_item("A", 5),
            test_item("B", 20),
            test_item("C", 12),
            test_item("D", 20),
            test_item("E", 1),
            test_item("F", 8),
        ];
        let once = top_by_quantity(&items, 5);
        let twice = top_by_quantity(&once, 5);
        assert_eq!(once, twice);
    }
}
