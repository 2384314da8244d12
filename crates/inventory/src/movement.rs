use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stocklens_core::{DomainError, ItemId, MovementId, OrganizationId};

/// Kind of stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    Inbound,
    Outbound,
    Transfer,
    Adjustment,
    Stocktake,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::Inbound => "inbound",
            MovementType::Outbound => "outbound",
            MovementType::Transfer => "transfer",
            MovementType::Adjustment => "adjustment",
            MovementType::Stocktake => "stocktake",
        }
    }

    /// Whether `quantity` carries an absolute set-value rather than a delta.
    ///
    /// Adjustments and stocktakes fix the on-hand count outright; the other
    /// kinds move stock relative to the current level.
    pub fn is_absolute(&self) -> bool {
        matches!(self, MovementType::Adjustment | MovementType::Stocktake)
    }

    /// Apply one movement of this kind to an on-hand quantity.
    ///
    /// Transfers relocate stock between locations, so at organization scope
    /// the on-hand total is unchanged.
    pub fn apply(&self, current: i64, quantity: i64) -> i64 {
        match self {
            MovementType::Inbound => current.saturating_add(quantity),
            MovementType::Outbound => current.saturating_sub(quantity),
            MovementType::Transfer => current,
            MovementType::Adjustment | MovementType::Stocktake => quantity,
        }
    }
}

impl core::fmt::Display for MovementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stock movement row, as supplied by the external store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: MovementId,
    pub organization_id: OrganizationId,
    pub item_id: ItemId,
    pub kind: MovementType,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl StockMovement {
    /// Validating constructor.
    ///
    /// Relative movements must carry a strictly positive quantity; absolute
    /// movements (adjustment, stocktake) may set zero but never a negative
    /// count.
    pub fn new(
        id: MovementId,
        organization_id: OrganizationId,
        item_id: ItemId,
        kind: MovementType,
        quantity: i64,
        occurred_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        if quantity == 0 && !kind.is_absolute() {
            return Err(DomainError::validation(format!(
                "{kind} movement quantity must be positive"
            )));
        }

        Ok(Self {
            id,
            organization_id,
            item_id,
            kind,
            quantity,
            occurred_at,
            notes: None,
        })
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement(kind: MovementType, quantity: i64) -> Result<StockMovement, DomainError> {
        StockMovement::new(
            MovementId::new(),
            OrganizationId::new(),
            ItemId::new(),
            kind,
            quantity,
            Utc::now(),
        )
    }

    #[test]
    fn relative_movements_require_positive_quantity() {
        assert!(movement(MovementType::Inbound, 0).is_err());
        assert!(movement(MovementType::Outbound, 0).is_err());
        assert!(movement(MovementType::Transfer, 0).is_err());
        assert!(movement(MovementType::Inbound, 5).is_ok());
    }

    #[test]
    fn absolute_movements_may_set_zero() {
        assert!(movement(MovementType::Adjustment, 0).is_ok());
        assert!(movement(MovementType::Stocktake, 0).is_ok());
    }

    #[test]
    fn negative_quantity_is_always_rejected() {
        for kind in [
            MovementType::Inbound,
            MovementType::Outbound,
            MovementType::Transfer,
            MovementType::Adjustment,
            MovementType::Stocktake,
        ] {
            assert!(movement(kind, -1).is_err(), "{kind} accepted a negative quantity");
        }
    }

    #[test]
    fn apply_follows_movement_semantics() {
        assert_eq!(MovementType::Inbound.apply(10, 5), 15);
        assert_eq!(MovementType::Outbound.apply(10, 5), 5);
        assert_eq!(MovementType::Transfer.apply(10, 5), 10);
        assert_eq!(MovementType::Adjustment.apply(10, 5), 5);
        assert_eq!(MovementType::Stocktake.apply(10, 0), 0);
    }

    #[test]
    fn with_notes_attaches_notes() {
        let m = movement(MovementType::Inbound, 5).unwrap().with_notes("received PO-42");
        assert_eq!(m.notes.as_deref(), Some("received PO-42"));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Receiving then shipping the same amount returns to the start.
            #[test]
            fn inbound_then_outbound_cancels(start in 0..1_000_000i64, qty in 1..1_000i64) {
                let received = MovementType::Inbound.apply(start, qty);
                prop_assert_eq!(MovementType::Outbound.apply(received, qty), start);
            }

            /// Absolute movements are idempotent: re-applying the same count
            /// changes nothing.
            #[test]
            fn absolute_movements_are_idempotent(start in 0..1_000_000i64, count in 0..1_000i64) {
                for kind in [MovementType::Adjustment, MovementType::Stocktake] {
                    let once = kind.apply(start, count);
                    prop_assert_eq!(kind.apply(once, count), once);
                }
            }
        }
    }
}
