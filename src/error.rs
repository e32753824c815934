use core::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("`{op}` is not supported by the backing sequence")]
    Unsupported { op: Op },
    #[error("invalid argument `{0}`")]
    InvalidArgument(&'static str),
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
    #[error("value is not of type `{expected}`")]
    InvalidCast { expected: &'static str },
}
impl ListError {
    #[must_use]
    pub const fn unsupported(op: Op) -> Self {
        Self::Unsupported { op }
    }
    #[must_use]
    pub const fn index(index: usize, len: usize) -> Self {
        Self::OutOfRange(OutOfRange::Index { index, len })
    }
    #[must_use]
    pub fn invalid_cast<T: ?Sized>() -> Self {
        Self::InvalidCast {
            expected: core::any::type_name::<T>(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutOfRange {
    #[error("index {index} is out of range for length {len}")]
    Index { index: usize, len: usize },
    #[error("{needed} slots needed past the offset but only {remaining} remain")]
    Capacity { needed: usize, remaining: usize },
}

/// Operations that can be refused by a backing sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Set,
    Add,
    Remove,
    Insert,
    RemoveAt,
    Clear,
    SyncRoot,
}
impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Set => "set",
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Insert => "insert",
            Self::RemoveAt => "remove_at",
            Self::Clear => "clear",
            Self::SyncRoot => "sync_root",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ListError::unsupported(Op::RemoveAt);
        assert_eq!(
            err.to_string(),
            "`remove_at` is not supported by the backing sequence"
        );
        let err = ListError::index(3, 2);
        assert_eq!(err.to_string(), "index 3 is out of range for length 2");
        let err = ListError::invalid_cast::<u8>();
        assert_eq!(err.to_string(), "value is not of type `u8`");
    }
}
