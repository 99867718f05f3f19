use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// A shared handle with no defined conversion
///
/// Coercions treat it as unconvertible and produce zero values. Two handles
/// are equal only if they point at the same allocation.
///
#[derive(Clone)]
pub struct Opaque {
    inner: Arc<dyn Any + Send + Sync>,
    name: &'static str,
}

impl Opaque {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Opaque {
            inner: Arc::new(value),
            name: type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.name
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Opaque<{}>", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_equality() {
        let a = Opaque::new(std::sync::mpsc::sync_channel::<i32>(1).0);
        let b = a.clone();
        let c = Opaque::new(std::sync::mpsc::sync_channel::<i32>(1).0);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn remembers_type() {
        let a = Opaque::new(5_u8);
        assert_eq!(a.type_name(), "u8");
        assert_eq!(a.downcast_ref::<u8>(), Some(&5));
        assert_eq!(format!("{a:?}"), "Opaque<u8>");
    }
}
