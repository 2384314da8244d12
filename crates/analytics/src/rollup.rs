//! Category and supplier roll-ups.
//!
//! Direct assignment only: an item counts toward the bucket it references,
//! and parent categories never absorb their children's items.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use stocklens_core::{CategoryId, Money, SupplierId};
use stocklens_inventory::{Category, InventoryItem, Supplier};

/// Aggregate of one bucket: how many items it holds and their stock value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BucketTotals {
    pub count: usize,
    pub value: Money,
}

/// Per-category totals, keyed by category id.
///
/// `None` is the explicit "uncategorized" bucket: items whose category
/// reference is null, or points at no supplied category, land there. Every
/// supplied category gets a bucket even when empty.
pub fn rollup_by_category(
    items: &[InventoryItem],
    categories: &[Category],
) -> HashMap<Option<CategoryId>, BucketTotals> {
    bucket_items(items, categories.iter().map(|c| c.id).collect(), |item| {
        item.category_id
    })
}

/// Per-supplier totals, keyed by supplier id; `None` collects items with no
/// (or a dangling) supplier reference.
pub fn rollup_by_supplier(
    items: &[InventoryItem],
    suppliers: &[Supplier],
) -> HashMap<Option<SupplierId>, BucketTotals> {
    bucket_items(items, suppliers.iter().map(|s| s.id).collect(), |item| {
        item.supplier_id
    })
}

fn bucket_items<K, F>(
    items: &[InventoryItem],
    known: HashSet<K>,
    key: F,
) -> HashMap<Option<K>, BucketTotals>
where
    K: Copy + Eq + Hash,
    F: Fn(&InventoryItem) -> Option<K>,
{
    let mut buckets: HashMap<Option<K>, BucketTotals> =
        known.iter().map(|k| (Some(*k), BucketTotals::default())).collect();

    for item in items {
        // Dangling references fall back to the unassigned bucket.
        let bucket = match key(item) {
            Some(k) if known.contains(&k) => Some(k),
            _ => None,
        };

        let totals = buckets.entry(bucket).or_default();
        totals.count += 1;
        totals.value = totals.value.saturating_add(item.stock_value());
    }

    buckets
}

/// One presentation row of the category breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub count: usize,
    pub value: Money,
}

/// Category totals joined with names, sorted by name with the
/// "Uncategorized" row last.
pub fn category_rows(items: &[InventoryItem], categories: &[Category]) -> Vec<CategoryRow> {
    let buckets = rollup_by_category(items, categories);

    let mut rows: Vec<CategoryRow> = categories
        .iter()
        .map(|category| {
            let totals = buckets.get(&Some(category.id)).copied().unwrap_or_default();
            CategoryRow {
                category_id: Some(category.id),
                name: category.name.clone(),
                count: totals.count,
                value: totals.value,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));

    if let Some(totals) = buckets.get(&None) {
        rows.push(CategoryRow {
            category_id: None,
            name: "Uncategorized".to_string(),
            count: totals.count,
            value: totals.value,
        });
    }

    rows
}
