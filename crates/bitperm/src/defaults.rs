use crate::PermissionDefinition;

/// Standard permission table used by [`PermissionRegistry::default`].
///
/// `MANAGE` is a bypass flag with value zero. It never tests as present
/// against any mask.
///
/// [`PermissionRegistry::default`]: crate::PermissionRegistry
pub static DEFAULT_PERMISSIONS: &[PermissionDefinition] = &[
    PermissionDefinition::new(
        0,
        "MANAGE",
        "It's a bypass permission that allows the user to manage the system.",
    ),
    PermissionDefinition::new(
        1,
        "GET",
        "It allows the user to get basic data from the system.",
    ),
    PermissionDefinition::new(
        2,
        "POST",
        "It allows the user to create data in the system.",
    ),
    PermissionDefinition::new(
        4,
        "PUT",
        "It allows the user to update data in the system.",
    ),
    PermissionDefinition::new(
        8,
        "DELETE",
        "It allows the user to delete data in the system.",
    ),
    PermissionDefinition::new(
        16,
        "DETAIL",
        "It allows the user to get detailed data from the system.",
    ),
    PermissionDefinition::new(
        32,
        "APPROVE",
        "It allows the user to approve data in the system.",
    ),
    PermissionDefinition::new(
        64,
        "REJECT",
        "It allows the user to reject data in the system.",
    ),
];
