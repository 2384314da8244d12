//! CSV export of an item snapshot.

use std::borrow::Cow;

use stocklens_inventory::InventoryItem;

const HEADER: [&str; 7] = [
    "SKU",
    "Name",
    "Quantity",
    "Unit",
    "Unit Cost",
    "Selling Price",
    "Status",
];

/// Serialize a snapshot to a CSV document, one row per item.
///
/// Fixed column order (see `HEADER`); monetary fields render with two
/// decimals and no locale separators. Rows are LF-joined with no trailing
/// newline. File naming and download mechanics belong to the caller.
pub fn items_to_csv(items: &[InventoryItem]) -> String {
    let mut out = HEADER.join(",");

    for item in items {
        let fields = [
            Cow::from(item.sku.as_str()),
            Cow::from(item.name.as_str()),
            Cow::from(item.quantity.to_string()),
            Cow::from(item.unit.as_str()),
            Cow::from(item.unit_cost.to_string()),
            Cow::from(item.selling_price.to_string()),
            Cow::from(item.status.as_str()),
        ];

        out.push('\n');
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&escape_field(field));
        }
    }

    out
}

/// Quote a field when it contains a comma, quote or line break; embedded
/// quotes are doubled per standard CSV escaping.
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
