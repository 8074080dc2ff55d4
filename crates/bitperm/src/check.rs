use std::fmt;

use crate::PermissionDefinition;

/// A suspicious entry in a permission table.
///
/// None of these stop a registry from working. They point at entries
/// whose behaviour is probably not what the table author meant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIssue {
    /// A later entry reuses a name and can never be found by lookup.
    DuplicateName {
        name: String,
        first: usize,
        duplicate: usize,
    },
    /// The value is neither zero nor a single bit.
    NotSingleBit { name: String, value: u64 },
    /// Two entries share bits.
    OverlappingBits {
        name: String,
        other: String,
        bits: u64,
    },
    /// Zero value, so the entry never tests as present.
    UnmatchableZero { name: String },
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableIssue::DuplicateName {
                name,
                first,
                duplicate,
            } => write!(
                f,
                "{name}: entry #{duplicate} duplicates entry #{first} and is unreachable"
            ),
            TableIssue::NotSingleBit { name, value } => {
                write!(f, "{name}: value {value:#b} is not a single bit")
            }
            TableIssue::OverlappingBits { name, other, bits } => {
                write!(f, "{name}: shares bits {bits:#b} with {other}")
            }
            TableIssue::UnmatchableZero { name } => {
                write!(f, "{name}: value is 0 and never tests as present")
            }
        }
    }
}

/// Inspect a permission table without changing how it behaves.
///
/// Issues are reported in table order. Zero-valued entries are reported
/// once each and are excluded from the overlap check.
pub fn check_table(permissions: &[PermissionDefinition]) -> Vec<TableIssue> {
    let mut issues = Vec::new();

    for (index, permission) in permissions.iter().enumerate() {
        let name = permission.name.as_ref();

        if let Some(first) = permissions[..index].iter().position(|p| p.name == name) {
            issues.push(TableIssue::DuplicateName {
                name: name.to_owned(),
                first,
                duplicate: index,
            });
        }

        match permission.value {
            0 => issues.push(TableIssue::UnmatchableZero {
                name: name.to_owned(),
            }),
            value if !value.is_power_of_two() => {
                issues.push(TableIssue::NotSingleBit {
                    name: name.to_owned(),
                    value,
                });
            }
            _ => {}
        }

        for other in &permissions[..index] {
            let bits = other.value & permission.value;
            if bits != 0 {
                issues.push(TableIssue::OverlappingBits {
                    name: name.to_owned(),
                    other: other.name.clone().into_owned(),
                    bits,
                });
            }
        }
    }

    log::debug!(
        "checked {} permissions, {} issues",
        permissions.len(),
        issues.len()
    );
    issues
}
