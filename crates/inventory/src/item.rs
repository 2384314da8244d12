use serde::{Deserialize, Serialize};

use stocklens_core::{CategoryId, DomainError, ItemId, LocationId, Money, OrganizationId, SupplierId};

/// Item lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    Active,
    Discontinued,
    OutOfStock,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::Discontinued => "discontinued",
            ItemStatus::OutOfStock => "out_of_stock",
        }
    }
}

impl core::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inventory item row, as supplied by the external store.
///
/// Quantities and amounts are carried exactly as received: a negative
/// `quantity` or `unit_cost` is a data-quality violation that aggregations
/// report (never clamp), so the fields are deliberately signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub organization_id: OrganizationId,
    pub sku: String,
    pub name: String,
    pub quantity: i64,
    /// Unit-of-measure label (e.g. "pcs", "kg").
    pub unit: String,
    pub unit_cost: Money,
    pub selling_price: Money,
    pub reorder_level: i64,
    pub reorder_quantity: i64,
    pub status: ItemStatus,
    pub category_id: Option<CategoryId>,
    pub supplier_id: Option<SupplierId>,
    pub location_id: Option<LocationId>,
}

impl InventoryItem {
    /// Validating constructor for the required fields.
    ///
    /// SKU and name must be non-blank; everything else is carried raw.
    /// Optional references default to none; set them on the returned value.
    pub fn new(
        id: ItemId,
        organization_id: OrganizationId,
        sku: impl Into<String>,
        name: impl Into<String>,
        quantity: i64,
        unit: impl Into<String>,
        unit_cost: Money,
        selling_price: Money,
        reorder_level: i64,
        reorder_quantity: i64,
        status: ItemStatus,
    ) -> Result<Self, DomainError> {
        let sku = sku.into();
        let name = name.into();

        if sku.trim().is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }

        Ok(Self {
            id,
            organization_id,
            sku,
            name,
            quantity,
            unit: unit.into(),
            unit_cost,
            selling_price,
            reorder_level,
            reorder_quantity,
            status,
            category_id: None,
            supplier_id: None,
            location_id: None,
        })
    }

    /// An item is low stock when its quantity is at or below the reorder level.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }

    /// Value of the stock on hand (quantity × unit cost).
    pub fn stock_value(&self) -> Money {
        self.unit_cost.times(self.quantity)
    }
}
