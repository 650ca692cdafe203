//! Scan direction/inclusivity and per-call scan options.

use crate::dtype::DType;

/// Traversal mode of a cumulative scan
///
/// The two independent switches (exclusive, reverse) collapse into four
/// variants so that a kernel never has to interpret flag combinations.
///
/// For input `[a, b, c]` and a sum:
///
/// | mode               | output                  |
/// |--------------------|-------------------------|
/// | `Inclusive`        | `[a, a+b, a+b+c]`       |
/// | `Exclusive`        | `[0, a, a+b]`           |
/// | `Reverse`          | `[a+b+c, b+c, c]`       |
/// | `ReverseExclusive` | `[b+c, c, 0]`           |
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanMode {
    /// Forward, each position includes itself
    #[default]
    Inclusive,
    /// Forward, each position covers strictly earlier elements
    Exclusive,
    /// Backward, each position includes itself
    Reverse,
    /// Backward, each position covers strictly later elements
    ReverseExclusive,
}

impl ScanMode {
    /// Build a mode from the two independent switches
    pub const fn new(exclusive: bool, reverse: bool) -> Self {
        match (exclusive, reverse) {
            (false, false) => Self::Inclusive,
            (true, false) => Self::Exclusive,
            (false, true) => Self::Reverse,
            (true, true) => Self::ReverseExclusive,
        }
    }

    /// Whether the scan excludes the current element
    #[inline]
    pub const fn is_exclusive(self) -> bool {
        matches!(self, Self::Exclusive | Self::ReverseExclusive)
    }

    /// Whether the scan runs from the high end of the axis
    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::Reverse | Self::ReverseExclusive)
    }

    /// Same direction, with inclusivity replaced
    #[inline]
    pub const fn with_exclusive(self, exclusive: bool) -> Self {
        Self::new(exclusive, self.is_reverse())
    }

    /// Same inclusivity, with direction replaced
    #[inline]
    pub const fn with_reverse(self, reverse: bool) -> Self {
        Self::new(self.is_exclusive(), reverse)
    }
}

/// Options for cumulative sum and product
///
/// # Example
///
/// ```
/// use scanr::dtype::DType;
/// use scanr::ops::{ScanMode, ScanOptions};
///
/// let opts = ScanOptions::new().exclusive(true).reverse(true).dtype(DType::F64);
/// assert_eq!(opts.mode, ScanMode::ReverseExclusive);
/// assert_eq!(opts.dtype, Some(DType::F64));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Direction and inclusivity
    pub mode: ScanMode,
    /// Output dtype; `None` selects the accumulation dtype of the input
    pub dtype: Option<DType>,
}

impl ScanOptions {
    /// Inclusive forward scan in the default accumulation dtype
    pub const fn new() -> Self {
        Self {
            mode: ScanMode::Inclusive,
            dtype: None,
        }
    }

    /// Set the traversal mode
    pub const fn mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    /// Toggle exclusivity
    pub const fn exclusive(mut self, exclusive: bool) -> Self {
        self.mode = self.mode.with_exclusive(exclusive);
        self
    }

    /// Toggle reverse traversal
    pub const fn reverse(mut self, reverse: bool) -> Self {
        self.mode = self.mode.with_reverse(reverse);
        self
    }

    /// Request an explicit output dtype
    pub const fn dtype(mut self, dtype: DType) -> Self {
        self.dtype = Some(dtype);
        self
    }
}

impl From<ScanMode> for ScanOptions {
    fn from(mode: ScanMode) -> Self {
        Self::new().mode(mode)
    }
}
