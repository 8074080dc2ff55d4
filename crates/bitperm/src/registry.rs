use std::borrow::Cow;

use bitperm_mask::PermissionSet;

use crate::{Error, PermissionDefinition, Result, DEFAULT_PERMISSIONS};

/// Ordered table of permission definitions and the bitmask operations over it.
///
/// The registry stores nothing about who holds which permission. Callers
/// keep their own masks and persist whatever the operations return.
///
/// Name lookups scan the table in order and use the first entry with a
/// matching name. The table is not validated on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionRegistry<'a> {
    permissions: Cow<'a, [PermissionDefinition]>,
}

impl Default for PermissionRegistry<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_PERMISSIONS)
    }
}

impl<'a> PermissionRegistry<'a> {
    /// Create a registry over a borrowed slice or an owned vector.
    pub fn new(permissions: impl Into<Cow<'a, [PermissionDefinition]>>) -> Self {
        let permissions = permissions.into();
        log::trace!("permission registry created with {} entries", permissions.len());
        Self { permissions }
    }

    /// The backing table, in its stored order.
    pub fn permissions_list(&self) -> &[PermissionDefinition] {
        &self.permissions
    }

    /// The first definition named `name`.
    pub fn definition(&self, name: &str) -> Result<&PermissionDefinition> {
        self.permissions
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| {
                log::debug!("lookup of unknown permission {name:?}");
                Error::NotFound(name.to_owned())
            })
    }

    /// The value of the first definition named `name`.
    pub fn permission_value(&self, name: &str) -> Result<u64> {
        self.definition(name).map(|p| p.value)
    }

    /// Check whether `permissions` shares any bit with the named permission.
    ///
    /// A permission whose value is zero is never present.
    ///
    /// ```
    /// # use bitperm::PermissionRegistry;
    /// let registry = PermissionRegistry::default();
    /// assert!(registry.validate_permission(1 | 2 | 4, "GET")?);
    /// assert!(!registry.validate_permission(1 | 2 | 4, "DELETE")?);
    /// # Ok::<(), bitperm::Error>(())
    /// ```
    pub fn validate_permission(&self, permissions: u64, name: &str) -> Result<bool> {
        let definition = self.definition(name)?;
        Ok(PermissionSet::from_value(permissions).intersects(definition))
    }

    /// Return `permissions` with the named permission's bits set.
    pub fn assign_permission(&self, permissions: u64, name: &str) -> Result<u64> {
        let definition = self.definition(name)?;
        Ok(PermissionSet::from_value(permissions).with(definition).value())
    }

    /// Return `permissions` with the named permission's bits cleared.
    ///
    /// ```
    /// # use bitperm::PermissionRegistry;
    /// let registry = PermissionRegistry::default();
    /// assert_eq!(registry.remove_permission(1 | 2 | 4, "GET")?, 6);
    /// # Ok::<(), bitperm::Error>(())
    /// ```
    pub fn remove_permission(&self, permissions: u64, name: &str) -> Result<u64> {
        let definition = self.definition(name)?;
        Ok(PermissionSet::from_value(permissions)
            .without(definition)
            .value())
    }

    /// Assign every name in turn. Stops at the first unknown name.
    pub fn assign_all<S: AsRef<str>>(
        &self,
        permissions: u64,
        names: &[S],
    ) -> Result<u64> {
        names.iter().try_fold(permissions, |mask, name| {
            self.assign_permission(mask, name.as_ref())
        })
    }

    /// Remove every name in turn. Stops at the first unknown name.
    pub fn remove_all<S: AsRef<str>>(
        &self,
        permissions: u64,
        names: &[S],
    ) -> Result<u64> {
        names.iter().try_fold(permissions, |mask, name| {
            self.remove_permission(mask, name.as_ref())
        })
    }

    /// Mask holding exactly the named permissions.
    pub fn mask_of<S: AsRef<str>>(&self, names: &[S]) -> Result<u64> {
        self.assign_all(0, names)
    }

    /// Definitions present in `permissions`, in table order.
    pub fn matching(
        &self,
        permissions: u64,
    ) -> impl Iterator<Item = &PermissionDefinition> + '_ {
        let set = PermissionSet::from_value(permissions);
        self.permissions.iter().filter(move |p| set.intersects(*p))
    }

    /// Names of the permissions present in `permissions`, in table order.
    ///
    /// Bits that no definition covers are ignored. Zero-valued
    /// definitions such as `MANAGE` never appear.
    pub fn permissions(&self, permissions: u64) -> Vec<String> {
        self.matching(permissions)
            .map(|p| p.name.clone().into_owned())
            .collect()
    }
}
