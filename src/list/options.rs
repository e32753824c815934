/// Construction-time configuration of a [`super::SeqList`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Copy a non-indexable backing into an owned buffer once, up front
    pub fast: bool,
    /// With `fast`, materialize into a fixed-size buffer instead of a `Vec`
    pub fixed_size: bool,
}
impl ListOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fast: false,
            fixed_size: false,
        }
    }
    #[must_use]
    pub const fn fast(mut self, fast: bool) -> Self {
        self.fast = fast;
        self
    }
    #[must_use]
    pub const fn fixed_size(mut self, fixed_size: bool) -> Self {
        self.fixed_size = fixed_size;
        self
    }
}
