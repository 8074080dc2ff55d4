mod set;

pub use set::PermissionSet;

/// Anything that occupies bits in a permission set.
pub trait Bitable {
    fn bits(&self) -> u64;
}

impl Bitable for u64 {
    #[inline]
    fn bits(&self) -> u64 {
        *self
    }
}

impl Bitable for PermissionSet {
    #[inline]
    fn bits(&self) -> u64 {
        self.value()
    }
}
