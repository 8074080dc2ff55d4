use std::fmt;

use crate::Bitable;

/// A combined permission value, one flag per bit.
///
/// The set never knows which names its bits stand for; that mapping lives
/// in a permission table. Every operation returns a new set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PermissionSet(u64);

impl PermissionSet {
    /// Create a set from a slice of values.
    pub fn new<T: Bitable>(values: &[T]) -> Self {
        values
            .iter()
            .fold(Self::empty(), |set, value| set.with(value))
    }

    /// Create an empty set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a set from a raw value.
    pub const fn from_value(value: u64) -> Self {
        Self(value)
    }

    /// Raw value of the set.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Check if the set shares at least one bit with `bits`.
    ///
    /// A zero-valued flag never intersects anything, including itself.
    #[inline]
    pub fn intersects<T: Bitable + ?Sized>(self, bits: &T) -> bool {
        (self.0 & bits.bits()) != 0
    }

    /// Return the set with `bits` added.
    #[inline]
    #[must_use]
    pub fn with<T: Bitable + ?Sized>(self, bits: &T) -> Self {
        Self(self.0 | bits.bits())
    }

    /// Return the set with `bits` cleared.
    #[inline]
    #[must_use]
    pub fn without<T: Bitable + ?Sized>(self, bits: &T) -> Self {
        Self(self.0 & !bits.bits())
    }

    /// Check if the set is subset of another set.
    #[inline]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & other.0 == self.0
    }
}

impl From<u64> for PermissionSet {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<PermissionSet> for u64 {
    fn from(set: PermissionSet) -> Self {
        set.0
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::PermissionSet;

    const GET: u64 = 1;
    const POST: u64 = 2;
    const PUT: u64 = 4;
    const MANAGE: u64 = 0;

    #[test]
    fn empty_has_no_bits_set() {
        let set = PermissionSet::empty();
        assert_eq!(set.value(), 0);
        assert!(!set.intersects(&GET));
        assert!(!set.intersects(&POST));
    }

    #[test]
    fn new_sets_bits_from_slice() {
        let set = PermissionSet::new(&[GET, PUT]);
        assert_eq!(set.value(), 5);
        assert!(set.intersects(&GET));
        assert!(!set.intersects(&POST));
        assert!(set.intersects(&PUT));
    }

    #[test]
    fn new_handles_duplicates() {
        let set = PermissionSet::new(&[POST, POST, PUT]);
        assert_eq!(set.value(), 6);
    }

    #[test]
    fn with_and_without_toggle_bits() {
        let set = PermissionSet::empty().with(&GET);
        assert!(set.intersects(&GET));

        let set = set.with(&POST);
        assert_eq!(set.value(), 3);

        let set = set.without(&GET);
        assert!(!set.intersects(&GET));
        assert!(set.intersects(&POST));
    }

    #[test]
    fn without_keeps_unrelated_bits() {
        let set = PermissionSet::from_value(0b1010_0111).without(&POST);
        assert_eq!(set.value(), 0b1010_0101);
    }

    #[test]
    fn zero_flag_never_intersects() {
        assert!(!PermissionSet::from_value(u64::MAX).intersects(&MANAGE));
        assert!(!PermissionSet::empty().intersects(&MANAGE));
        assert_eq!(PermissionSet::from_value(7).with(&MANAGE).value(), 7);
        assert_eq!(PermissionSet::from_value(7).without(&MANAGE).value(), 7);
    }

    #[test]
    fn is_subset_works() {
        let empty = PermissionSet::empty();
        let a = PermissionSet::from_value(GET);
        let b = PermissionSet::from_value(POST);
        let ab = PermissionSet::new(&[GET, POST]);

        // empty is subset of any set
        assert!(empty.is_subset(empty));
        assert!(empty.is_subset(a));
        assert!(empty.is_subset(ab));

        assert!(a.is_subset(a));
        assert!(a.is_subset(ab));

        assert!(!ab.is_subset(a));
        assert!(!a.is_subset(b));
    }

    #[test]
    fn formats_as_raw_value() {
        let set = PermissionSet::from_value(6);
        assert_eq!(set.to_string(), "6");
        assert_eq!(u64::from(set), 6);
    }
}
