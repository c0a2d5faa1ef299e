use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A shared, opaque reference to a platform-native issuer-list structure.
///
/// The handshake layer that produced the structure and every
/// [`ClientAuthInfo`](crate::ClientAuthInfo) built from it hold the same
/// allocation; it is released when the last holder is dropped. This crate
/// never inspects the contents. A platform-specific consumer recovers the
/// concrete structure with [`downcast_ref`](NativeHandle::downcast_ref).
#[derive(Clone)]
pub struct NativeHandle(Arc<dyn Any + Send + Sync>);

impl NativeHandle {
    /// Wrap a platform structure in a shared handle.
    pub fn new<T>(value: T) -> NativeHandle
    where
        T: Any + Send + Sync,
    {
        NativeHandle(Arc::new(value))
    }

    /// Reinterpret the handle as a concrete platform structure.
    ///
    /// Returns `None` if the handle was built from a different type. On
    /// Windows Schannel, for example, the handshake layer stores a
    /// `SecPkgContext_IssuerListInfoEx` here and the certificate-selection
    /// code recovers it through this method.
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Any + Send + Sync,
    {
        self.0.downcast_ref()
    }

    /// Whether two handles refer to the same underlying allocation.
    pub fn ptr_eq(&self, other: &NativeHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeHandle").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downcast_matches_stored_type() {
        let handle = NativeHandle::new(0x1234u32);
        assert_eq!(handle.downcast_ref::<u32>(), Some(&0x1234));
        assert_eq!(handle.downcast_ref::<u64>(), None);
    }

    #[test]
    fn clone_is_same_allocation() {
        let handle = NativeHandle::new(vec![1u8, 2, 3]);
        let other = handle.clone();
        assert!(handle.ptr_eq(&other));

        let unrelated = NativeHandle::new(vec![1u8, 2, 3]);
        assert!(!handle.ptr_eq(&unrelated));
    }
}
