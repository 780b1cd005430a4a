use std::fmt;

/// The five value kinds of the language.
///
/// Types are plain tags compared by identity. The only ordering between them
/// is the numeric promotion NUMBR < NUMBAR used by arithmetic and equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// `NOOB`, the untyped value.
    Noob,
    /// `TROOF`, a boolean.
    Troof,
    /// `NUMBR`, a 64-bit signed integer.
    Numbr,
    /// `NUMBAR`, a 64-bit float.
    Numbar,
    /// `YARN`, a string.
    Yarn,
}

impl Type {
    /// Returns `true` for NUMBR and NUMBAR.
    ///
    /// ## Example
    /// ```
    /// use lolcode::interpreter::value::types::Type;
    ///
    /// assert!(Type::Numbar.is_numeric());
    /// assert!(!Type::Yarn.is_numeric());
    /// ```
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Numbr | Self::Numbar)
    }

    /// The keyword naming this type in source code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Noob => "NOOB",
            Self::Troof => "TROOF",
            Self::Numbr => "NUMBR",
            Self::Numbar => "NUMBAR",
            Self::Yarn => "YARN",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
