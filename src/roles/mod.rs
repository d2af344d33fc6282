//! Role catalog and randomized assignment.
//!
//! Roles are static, catalog-defined data: 8 fixed identities with
//! bilingual display names, point values and presentation payload.
//! Assignment shuffles the active role set for the table size and pairs
//! it positionally with the players.

pub mod assign;
pub mod catalog;
pub mod definition;

pub use assign::{assign_roles, RoleHolders};
pub use catalog::{RoleCatalog, RoleSet};
pub use definition::{Language, RoleDefinition, RoleId};
