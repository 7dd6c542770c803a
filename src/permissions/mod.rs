//! # Permissions
//!
//! Capability vocabulary, role catalog, and the resolution chain that turns
//! an authenticated principal into an effective capability set.

pub mod capability;
pub mod resolver;
pub mod role;

pub use capability::{Capability, CapabilitySet};
pub use resolver::{PermissionResolver, SuperuserRule};
pub use role::{Role, RoleCatalog};
