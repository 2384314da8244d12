//! Role-based access policy.
//!
//! The dashboard's three-level role model (admin / manager / viewer),
//! expressed as explicit arguments and pure checks. Nothing here reads
//! ambient session state; surfaces resolve a role once and pass it in.

pub mod permissions;
pub mod policy;
pub mod roles;

pub use permissions::Permission;
pub use policy::{authorize, permissions_for};
pub use roles::Role;
