use serde::{Deserialize, Serialize};

use stocklens_core::{CategoryId, OrganizationId};

/// One category row, as supplied by the external store.
///
/// `parent_id` forms a tree. The tree is not walked by any aggregation
/// (roll-ups count direct assignment only) and acyclicity is an external
/// invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub organization_id: OrganizationId,
    pub name: String,
    /// Display color (hex string, UI concern carried verbatim).
    pub color: String,
    pub parent_id: Option<CategoryId>,
}
