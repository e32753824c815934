use core::ops::Deref;

/// Equality used by the linear-scan fallbacks
pub trait Comparer<T: ?Sized> {
    #[must_use]
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// Structural equality through [`PartialEq`]
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultComparer;
impl<T: PartialEq + ?Sized> Comparer<T> for DefaultComparer {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Identity of the pointee for pointer-like values (`Rc`, `Arc`, `Box`, `&T`)
#[derive(Debug, Clone, Copy, Default)]
pub struct ByAddress;
impl<P: Deref> Comparer<P> for ByAddress {
    fn equals(&self, a: &P, b: &P) -> bool {
        core::ptr::eq(&**a, &**b)
    }
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_by_address() {
        let a = Rc::new(1);
        let b = Rc::new(1);
        assert!(DefaultComparer.equals(&a, &b));
        assert!(!ByAddress.equals(&a, &b));
        assert!(ByAddress.equals(&a, &a.clone()));
    }

    #[test]
    fn test_fn() {
        let case_insensitive = |a: &&str, b: &&str| a.eq_ignore_ascii_case(b);
        assert!(case_insensitive.equals(&"Ab", &"aB"));
    }
}
