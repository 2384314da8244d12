use stocklens_core::DomainError;

use crate::{Permission, Role};

/// Permissions granted to each role.
///
/// Admin holds the wildcard. Manager can read and edit operational data but
/// not administer the organization. Viewer is read-only.
pub fn permissions_for(role: Role) -> Vec<Permission> {
    let names: &[&'static str] = match role {
        Role::Admin => &["*"],
        Role::Manager => &[
            "inventory.read",
            "inventory.write",
            "movements.read",
            "movements.write",
            "categories.read",
            "categories.write",
            "suppliers.read",
            "suppliers.write",
            "alerts.read",
            "alerts.acknowledge",
            "reports.read",
            "reports.export",
        ],
        Role::Viewer => &[
            "inventory.read",
            "movements.read",
            "categories.read",
            "suppliers.read",
            "alerts.read",
            "reports.read",
        ],
    };

    names.iter().map(|n| Permission::new(*n)).collect()
}

/// Authorize a role for one permission.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(role: Role, required: &Permission) -> Result<(), DomainError> {
    let granted = permissions_for(role);

    if granted.iter().any(|p| p.is_wildcard() || p == required) {
        Ok(())
    } else {
        Err(DomainError::unauthorized(format!(
            "role '{role}' lacks permission '{required}'"
        )))
    }
}
