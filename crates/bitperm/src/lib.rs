//! Named permissions encoded as bits of a single integer.
//!
//! A [`PermissionRegistry`] holds an ordered table of
//! [`PermissionDefinition`]s and answers questions about caller-owned
//! bitmasks. Nothing is stored: every operation takes a mask and returns a
//! new one.
//!
//! ```
//! use bitperm::PermissionRegistry;
//!
//! let registry = PermissionRegistry::default();
//! let mask = registry.assign_permission(1, "POST")?;
//! assert_eq!(mask, 3);
//! assert!(registry.validate_permission(mask, "GET")?);
//! assert_eq!(registry.permissions(mask), ["GET", "POST"]);
//! # Ok::<(), bitperm::Error>(())
//! ```
mod check;
mod defaults;
mod definition;
mod error;
mod registry;
mod table;

pub use bitperm_mask::{Bitable, PermissionSet};

pub use check::{check_table, TableIssue};
pub use defaults::DEFAULT_PERMISSIONS;
pub use definition::PermissionDefinition;
pub use error::{Error, Result, TableError};
pub use registry::PermissionRegistry;
pub use table::{load_table, parse_table};
