use std::path::Path;

use serde::Deserialize;

use crate::{PermissionDefinition, TableError};

/// Read a yaml permission table from disk.
pub fn load_table(path: &Path) -> Result<Vec<PermissionDefinition>, TableError> {
    log::debug!("loading permission table from {}", path.display());
    let input = std::fs::read_to_string(path)?;
    parse_table(&input)
}

/// Parse yaml permission table.
pub fn parse_table(input: &str) -> Result<Vec<PermissionDefinition>, TableError> {
    let version = parse_version(input)?;
    match version {
        1 => {
            let table: TableV1 = serde_yaml::from_str(input)?;
            Ok(table.permissions)
        }
        _ => Err(TableError::UnsupportedVersion(version)),
    }
}

#[derive(Debug, Clone, Deserialize)]
struct TableV1 {
    #[serde(default)]
    permissions: Vec<PermissionDefinition>,
}

/// A table with a version.
#[derive(Debug, Clone, Deserialize)]
struct VersionedTable {
    version: u8,
}

/// Parse the version of yaml table.
fn parse_version(input: &str) -> Result<u8, TableError> {
    let raw: VersionedTable = serde_yaml::from_str(input)?;
    Ok(raw.version)
}
