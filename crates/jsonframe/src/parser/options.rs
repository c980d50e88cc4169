/// Configuration options for the streaming reassembler.
///
/// The grammar itself is fixed; options only bound the resources a single
/// stream may claim.
///
/// # Default
///
/// All limits default to `None` (unbounded).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserOptions {
    /// Maximum number of characters the buffer may hold.
    ///
    /// An unterminated string never fails on its own, so a peer that never
    /// closes one grows the buffer without bound. Setting a limit turns that
    /// into a `buffer limit exceeded` error at the first character that
    /// would go past it.
    ///
    /// # Default
    ///
    /// `None`
    pub max_buffer_len: Option<usize>,

    /// Maximum number of live context frames.
    ///
    /// Every open container, key, value, and scalar token holds one frame, so
    /// `[[1]]` needs three while the `1` is being read.
    ///
    /// # Default
    ///
    /// `None`
    pub max_depth: Option<usize>,

    #[cfg(any(test, feature = "fuzzing"))]
    /// Panic on syntax errors instead of returning them.
    ///
    /// Enabled only in test builds to produce backtraces on parse failures.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub panic_on_error: bool,
}
