use bitperm::{check_table, PermissionRegistry};
use colored::Colorize;

use crate::cli::Command;
use crate::error::CliError;
use crate::{print_debug, print_info};

/// Run a command against the registry and return the lines to print.
pub(crate) fn run(
    command: &Command,
    registry: &PermissionRegistry<'_>,
) -> Result<Vec<String>, CliError> {
    let lines: Vec<String> = match command {
        Command::List => registry
            .permissions_list()
            .iter()
            .map(|p| describe(&p.name, p.value, &p.description))
            .collect(),
        Command::Check { mask, name } => {
            let present = registry.validate_permission(*mask, name)?;
            print_debug!("{name} in {mask:#b}: {present}");
            vec![present.to_string()]
        }
        Command::Assign { mask, names } => {
            vec![registry.assign_all(*mask, names.as_slice())?.to_string()]
        }
        Command::Remove { mask, names } => {
            vec![registry.remove_all(*mask, names.as_slice())?.to_string()]
        }
        Command::Decode { mask } => registry
            .matching(*mask)
            .map(|p| describe(&p.name, p.value, &p.description))
            .collect(),
        Command::Encode { names } => vec![registry.mask_of(names.as_slice())?.to_string()],
        Command::Lint => {
            let issues = check_table(registry.permissions_list());
            if issues.is_empty() {
                print_info!("no issues in {} permissions", registry.permissions_list().len());
            }
            issues.iter().map(ToString::to_string).collect()
        }
    };
    Ok(lines)
}

fn describe(name: &str, value: u64, description: &str) -> String {
    if description.is_empty() {
        format!("{name:<12} {value:>20}")
    } else {
        format!("{name:<12} {value:>20}  {description}")
    }
}

#[cfg(test)]
mod tests {
    use bitperm::{Error, PermissionDefinition};

    use super::*;

    fn run_default(command: Command) -> Result<Vec<String>, CliError> {
        run(&command, &PermissionRegistry::default())
    }

    #[test]
    fn list_prints_every_entry_in_order() {
        let lines = run_default(Command::List).unwrap();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("MANAGE"));
        assert!(lines[7].starts_with("REJECT"));
    }

    #[test]
    fn check_reports_presence() {
        let lines = run_default(Command::Check {
            mask: 3,
            name: "GET".into(),
        })
        .unwrap();
        assert_eq!(lines, ["true"]);
    }

    #[test]
    fn assign_and_remove_print_new_mask() {
        let assigned = run_default(Command::Assign {
            mask: 1,
            names: vec!["POST".into(), "PUT".into()],
        })
        .unwrap();
        assert_eq!(assigned, ["7"]);

        let removed = run_default(Command::Remove {
            mask: 7,
            names: vec!["GET".into()],
        })
        .unwrap();
        assert_eq!(removed, ["6"]);
    }

    #[test]
    fn encode_builds_mask_from_names() {
        let lines = run_default(Command::Encode {
            names: vec!["APPROVE".into(), "REJECT".into()],
        })
        .unwrap();
        assert_eq!(lines, ["96"]);
    }

    #[test]
    fn decode_lists_present_permissions() {
        let lines = run_default(Command::Decode { mask: 1 | 2 | 128 }).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("GET"));
        assert!(lines[1].starts_with("POST"));
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = run_default(Command::Check {
            mask: 1,
            name: "WRITE".into(),
        })
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::Permission(Error::NotFound(ref name)) if name == "WRITE"
        ));
        assert_eq!(err.to_string(), "Permission [WRITE] not found.");
    }

    #[test]
    fn lint_uses_registry_table() {
        let table = [
            PermissionDefinition::new(1, "READ", ""),
            PermissionDefinition::new(1, "READ", ""),
        ];
        let registry = PermissionRegistry::new(&table[..]);
        let lines = run(&Command::Lint, &registry).unwrap();
        assert_eq!(
            lines,
            [
                "READ: entry #1 duplicates entry #0 and is unreachable",
                "READ: shares bits 0b1 with READ",
            ]
        );
    }

    #[test]
    fn describe_omits_empty_description() {
        assert_eq!(describe("READ", 1, ""), format!("{:<12} {:>20}", "READ", 1));
    }
}
