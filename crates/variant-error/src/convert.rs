//! Conversion rules between kind sets
//!
//! `Source: SubsetOf<Target, I>` holds exactly when every kind of `Source`
//! is a kind of `Target`. It gates [`VariantError::cast_to`]; the
//! `cast_add_*` operations satisfy it by construction.

use crate::error::VariantError;
use crate::kind::Kind;
use crate::list::{Append, Cons, Contains, IntoSet, Subset};
use crate::set::{KindSet, PushBack, PushFront};

/// Every kind of this set is a member of `Target`. `I` lists the positions and
/// is always inferred.
///
/// ```rust
/// use std::{fmt, io};
/// use variant_error::SubsetOf;
///
/// fn convertible<S: SubsetOf<T, I>, T: variant_error::KindSet, I>() {}
///
/// convertible::<(io::Error,), (fmt::Error, io::Error), _>();
/// convertible::<(fmt::Error, io::Error), (io::Error, fmt::Error), _>();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a subset of `{Target}`",
    label = "some kind of `{Self}` is missing from `{Target}`",
    note = "`cast_to` only accepts targets that contain every source kind"
)]
pub trait SubsetOf<Target: KindSet, I>: KindSet {
    /// Re-tag a payload of this set under `Target`.
    fn cast(repr: Self::Repr) -> Target::Repr;
}

impl<K, Target, I> SubsetOf<Target, I> for K
where
    K: KindSet,
    Target: KindSet,
    K::Repr: Subset<Target::Repr, I>,
{
    #[inline]
    fn cast(repr: Self::Repr) -> Target::Repr {
        <K::Repr as Subset<Target::Repr, I>>::embed(repr)
    }
}

// ============================================================================
// Result Extensions
// ============================================================================

/// Conversions on the error side of a `Result<T, VariantError<K>>`.
pub trait VariantResultExt<T, K: KindSet> {
    /// [`VariantError::cast_to`] on the error.
    fn cast_err<Target, I>(self) -> Result<T, VariantError<Target>>
    where
        Target: KindSet,
        K: SubsetOf<Target, I>;

    /// [`VariantError::cast_add_front`] on the error.
    fn err_add_front<N>(self) -> Result<T, VariantError<PushFront<K, N>>>
    where
        N: Kind,
        Cons<N, K::Repr>: IntoSet;

    /// [`VariantError::cast_add_back`] on the error.
    fn err_add_back<N>(self) -> Result<T, VariantError<PushBack<K, N>>>
    where
        N: Kind,
        K::Repr: Append<N>,
        <K::Repr as Append<N>>::Output: IntoSet;
}

impl<T, K: KindSet> VariantResultExt<T, K> for Result<T, VariantError<K>> {
    #[inline]
    fn cast_err<Target, I>(self) -> Result<T, VariantError<Target>>
    where
        Target: KindSet,
        K: SubsetOf<Target, I>,
    {
        self.map_err(|err| err.cast_to::<Target, I>())
    }

    #[inline]
    fn err_add_front<N>(self) -> Result<T, VariantError<PushFront<K, N>>>
    where
        N: Kind,
        Cons<N, K::Repr>: IntoSet,
    {
        self.map_err(|err| err.cast_add_front::<N>())
    }

    #[inline]
    fn err_add_back<N>(self) -> Result<T, VariantError<PushBack<K, N>>>
    where
        N: Kind,
        K::Repr: Append<N>,
        <K::Repr as Append<N>>::Output: IntoSet,
    {
        self.map_err(|err| err.cast_add_back::<N>())
    }
}

/// Lifts a plain `Result<T, E>` into a `VariantError` over any set containing `E`.
pub trait KindResultExt<T, E> {
    fn kind_err<K, I>(self) -> Result<T, VariantError<K>>
    where
        K: KindSet,
        K::Repr: Contains<E, I>;
}

impl<T, E> KindResultExt<T, E> for Result<T, E> {
    #[inline]
    fn kind_err<K, I>(self) -> Result<T, VariantError<K>>
    where
        K: KindSet,
        K::Repr: Contains<E, I>,
    {
        self.map_err(VariantError::new::<E, I>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use std::io;
    use std::num::TryFromIntError;

    fn subset<S: SubsetOf<T, I>, T: KindSet, I>() {}

    fn parse_byte(value: i32) -> Result<u8, VariantError<(TryFromIntError,)>> {
        u8::try_from(value).kind_err()
    }

    #[test]
    fn test_subset_reflexive() {
        subset::<(io::Error, fmt::Error), (io::Error, fmt::Error), _>();
    }

    #[test]
    fn test_subset_order_insensitive() {
        subset::<(io::Error, fmt::Error), (fmt::Error, io::Error), _>();
        subset::<(fmt::Error, io::Error), (io::Error, fmt::Error), _>();
    }

    #[test]
    fn test_empty_is_subset_of_everything() {
        subset::<(), (), _>();
        subset::<(), (io::Error,), _>();
    }

    #[test]
    fn test_cast_err_keeps_ok() {
        let widened = parse_byte(7).cast_err::<(io::Error, TryFromIntError), _>();
        assert_eq!(widened.ok(), Some(7));
    }

    #[test]
    fn test_cast_err_moves_error() {
        let widened = parse_byte(700).cast_err::<(io::Error, TryFromIntError), _>();
        let err = widened.unwrap_err();
        assert_eq!(err.discriminant(), 1);
        assert!(err.is::<TryFromIntError, _>());
    }

    #[test]
    fn test_err_add_front_and_back() {
        let front: Result<u8, VariantError<(fmt::Error, TryFromIntError)>> =
            parse_byte(-1).err_add_front::<fmt::Error>();
        assert_eq!(front.unwrap_err().discriminant(), 1);

        let back: Result<u8, VariantError<(TryFromIntError, fmt::Error)>> =
            parse_byte(-1).err_add_back::<fmt::Error>();
        assert_eq!(back.unwrap_err().discriminant(), 0);
    }

    #[test]
    fn test_kind_err_into_wider_set() {
        let result: Result<(), VariantError<(io::Error, fmt::Error)>> = Err(fmt::Error).kind_err();
        let err = result.unwrap_err();
        assert_eq!(err.discriminant(), 1);
        assert_eq!(err.message(), fmt::Error.to_string());
    }
}
