//! The message capability every error kind must provide.

use std::borrow::Cow;
use std::fmt;

/// A concrete error payload that can be stored in a [`VariantError`](crate::VariantError).
///
/// Any `std::error::Error + 'static` type is a kind automatically, with its
/// `Display` output as the message. Types that are not `Error` implement this
/// trait directly.
///
/// ```rust
/// use std::borrow::Cow;
/// use variant_error::{Kind, VariantError};
///
/// #[derive(Debug)]
/// struct Timeout;
///
/// impl Kind for Timeout {
///     fn message(&self) -> Cow<'_, str> {
///         Cow::Borrowed("timed out")
///     }
/// }
///
/// let err: VariantError<(Timeout,)> = VariantError::new(Timeout);
/// assert_eq!(err.message(), "timed out");
/// ```
///
/// A type without the capability cannot be part of a kind set:
///
/// ```compile_fail
/// use variant_error::VariantError;
///
/// #[derive(Debug)]
/// struct Silent;
///
/// let _err: VariantError<(Silent,)> = VariantError::new(Silent);
/// ```
pub trait Kind: fmt::Debug {
    /// Human-readable description of this error.
    fn message(&self) -> Cow<'_, str>;
}

impl<E> Kind for E
where
    E: std::error::Error + 'static,
{
    fn message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}
