//! Movement statistics.

use chrono::{DateTime, Utc};

use stocklens_inventory::StockMovement;

/// Default "recent movements" depth used by the dashboard surface.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// The `limit` newest movements, timestamp descending.
///
/// Ties break by movement id so the order is total and reproducible.
pub fn recent_movements(movements: &[StockMovement], limit: usize) -> Vec<StockMovement> {
    let mut recent = movements.to_vec();
    recent.sort_by(|a, b| {
        b.occurred_at
            .cmp(&a.occurred_at)
            .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
    });
    recent.truncate(limit);
    recent
}

/// Count movements at or after an instant (e.g. the first of the month).
pub fn count_since(movements: &[StockMovement], since: DateTime<Utc>) -> usize {
    movements.iter().filter(|m| m.occurred_at >= since).count()
}

/// Fold movements onto a starting on-hand quantity, oldest first.
///
/// Inbound adds, outbound subtracts, transfers are net-zero at organization
/// scope, adjustments and stocktakes set the absolute level.
pub fn project_quantity(start: i64, movements: &[StockMovement]) -> i64 {
    let mut ordered: Vec<&StockMovement> = movements.iter().collect();
    ordered.sort_by(|a, b| {
        a.occurred_at
            .cmp(&b.occurred_at)
            .then_with(|| a.id.as_uuid().cmp(b.id.as_uuid()))
    });

    ordered
        .into_iter()
        .fold(start, |quantity, m| m.kind.apply(quantity, m.quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};
    use stocklens_core::{ItemId, MovementId, OrganizationId};
    use stocklens_inventory::MovementType;

    fn test_movement(kind: MovementType, quantity: i64, day: u32) -> StockMovement {
        StockMovement::new(
            MovementId::new(),
            OrganizationId::new(),
            ItemId::new(),
            kind,
            quantity,
            Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn recent_movements_are_newest_first_and_truncated() {
        let movements = vec![
            test_movement(MovementType::Inbound, 5, 1),
            test_movement(MovementType::Outbound, 2, 15),
            test_movement(MovementType::Inbound, 9, 8),
        ];

        let recent = recent_movements(&movements, 2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].occurred_at.day(), 15);
        assert_eq!(recent[1].occurred_at.day(), 8);
    }

    #[test]
    fn count_since_is_inclusive_at_the_boundary() {
        let movements = vec![
            test_movement(MovementType::Inbound, 5, 1),
            test_movement(MovementType::Inbound, 5, 10),
            test_movement(MovementType::Inbound, 5, 20),
        ];
        let since = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(count_since(&movements, since), 2);
    }

    #[test]
    fn projection_applies_movements_in_chronological_order() {
        // Out-of-order input: the stocktake on day 10 resets to 50, then
        // day 12 ships 8 and day 20 receives 5.
        let movements = vec![
            test_movement(MovementType::Inbound, 5, 20),
            test_movement(MovementType::Stocktake, 50, 10),
            test_movement(MovementType::Outbound, 8, 12),
        ];

        assert_eq!(project_quantity(100, &movements), 47);
    }

    #[test]
    fn transfers_do_not_change_the_organization_total() {
        let movements = vec![test_movement(MovementType::Transfer, 30, 5)];
        assert_eq!(project_quantity(40, &movements), 40);
    }

    #[test]
    fn adjustment_sets_an_absolute_level() {
        let movements = vec![
            test_movement(MovementType::Inbound, 10, 1),
            test_movement(MovementType::Adjustment, 3, 2),
        ];
        assert_eq!(project_quantity(0, &movements), 3);
    }
}
