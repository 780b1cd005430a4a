/// Type tags.
///
/// Defines the `Type` enum naming the five value kinds and the numeric
/// promotion rule between NUMBR and NUMBAR.
pub mod types;
/// Explicit casts.
///
/// Implements `MAEK` and `IS NOW A`: best-effort conversion to a target type,
/// reporting a uniform "casting failed" error when a numeric parse fails.
pub mod cast;

pub mod core;
