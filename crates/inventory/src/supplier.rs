use serde::{Deserialize, Serialize};

use stocklens_core::{OrganizationId, SupplierId};

/// One supplier row, narrowed to what the roll-up consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub organization_id: OrganizationId,
    pub name: String,
}
