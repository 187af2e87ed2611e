//! The variant error value

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::convert::SubsetOf;
use crate::kind::Kind;
use crate::list::{Append, Cons, Contains, IntoSet, KindList};
use crate::report::ErrorReport;
use crate::set::{KindSet, Narrowed, PushBack, PushFront};

/// One error out of the closed kind set `K`.
///
/// `K` is a tuple of kind types such as `(OutOfRange, SystemError)`. The value
/// holds exactly one payload of one of those kinds. It never changes kind in
/// place; conversions consume it and return a value of another kind set
/// carrying the same payload.
pub struct VariantError<K: KindSet> {
    inner: K::Repr,
}

// ============================================================================
// Construction
// ============================================================================

impl<K: KindSet> VariantError<K> {
    /// Wrap `value` as the active kind.
    ///
    /// `T` must be one of the kinds of `K`:
    ///
    /// ```compile_fail
    /// use std::io;
    /// use std::num::TryFromIntError;
    /// use variant_error::VariantError;
    ///
    /// let io_err = io::Error::other("boom");
    /// let _ = VariantError::<(TryFromIntError,)>::new(io_err);
    /// ```
    ///
    /// and must appear in `K` only once:
    ///
    /// ```compile_fail
    /// use std::io;
    /// use variant_error::VariantError;
    ///
    /// let io_err = io::Error::other("boom");
    /// let _ = VariantError::<(io::Error, io::Error)>::new(io_err);
    /// ```
    #[inline]
    pub fn new<T, I>(value: T) -> Self
    where
        K::Repr: Contains<T, I>,
    {
        Self {
            inner: <K::Repr as Contains<T, I>>::inject(value),
        }
    }
}

impl<T: Kind> VariantError<(T,)> {
    /// Wrap `value` in a single-kind error. Usable in constant context.
    ///
    /// ```rust
    /// use std::borrow::Cow;
    /// use variant_error::{Kind, VariantError};
    ///
    /// #[derive(Debug)]
    /// struct Haha;
    ///
    /// impl Kind for Haha {
    ///     fn message(&self) -> Cow<'_, str> {
    ///         Cow::Borrowed("HAHA")
    ///     }
    /// }
    ///
    /// const ERR: VariantError<(Haha,)> = VariantError::from_kind(Haha);
    /// assert_eq!(ERR.message(), "HAHA");
    /// ```
    pub const fn from_kind(value: T) -> Self {
        Self {
            inner: Cons::Head(value),
        }
    }

    /// Unwrap the only possible payload.
    pub fn into_inner(self) -> T {
        match self.inner {
            Cons::Head(value) => value,
            Cons::Tail(nil) => match nil {},
        }
    }
}

impl VariantError<()> {
    /// An error over the empty set cannot exist.
    pub fn unreachable(self) -> ! {
        match self.inner {}
    }
}

impl<T: Kind> From<T> for VariantError<(T,)> {
    fn from(value: T) -> Self {
        Self::from_kind(value)
    }
}

// ============================================================================
// Inspection
// ============================================================================

impl<K: KindSet> VariantError<K> {
    /// Message of the active payload.
    #[inline]
    pub fn message(&self) -> Cow<'_, str> {
        self.inner.message()
    }

    /// Zero-based position of the active kind within `K`.
    #[inline]
    pub fn discriminant(&self) -> usize {
        self.inner.discriminant()
    }

    /// Type name of the active kind.
    pub fn kind_name(&self) -> &'static str {
        self.inner.kind_name()
    }

    /// Type names of all kinds of `K`, in declaration order.
    pub fn kinds() -> Vec<&'static str> {
        let mut names = Vec::with_capacity(K::LEN);
        <K::Repr as KindList>::collect_names(&mut names);
        names
    }

    /// Whether the active kind is `T`.
    ///
    /// A kind held twice has no single position to test:
    ///
    /// ```compile_fail
    /// use std::fmt;
    /// use variant_error::VariantError;
    ///
    /// let err = VariantError::<(fmt::Error,)>::from(fmt::Error).cast_add_back::<fmt::Error>();
    /// let _ = err.is::<fmt::Error, _>();
    /// ```
    #[inline]
    pub fn is<T, I>(&self) -> bool
    where
        K::Repr: Contains<T, I>,
    {
        self.get::<T, I>().is_some()
    }

    /// Borrow the payload if the active kind is `T`.
    ///
    /// ```rust
    /// use std::fmt;
    /// use std::io;
    /// use variant_error::VariantError;
    ///
    /// let err = VariantError::<(io::Error, fmt::Error)>::new(fmt::Error);
    /// assert_eq!(err.get::<fmt::Error, _>(), Some(&fmt::Error));
    /// assert!(err.get::<io::Error, _>().is_none());
    /// ```
    ///
    /// Lookup in a set that holds `T` twice does not compile:
    ///
    /// ```compile_fail
    /// use std::fmt;
    /// use variant_error::VariantError;
    ///
    /// let err = VariantError::<(fmt::Error,)>::from(fmt::Error).cast_add_front::<fmt::Error>();
    /// let _ = err.get::<fmt::Error, _>();
    /// ```
    #[inline]
    pub fn get<T, I>(&self) -> Option<&T>
    where
        K::Repr: Contains<T, I>,
    {
        <K::Repr as Contains<T, I>>::get(&self.inner)
    }

    /// Snapshot of the active kind for logging or reporting.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind_name(),
            discriminant: self.discriminant(),
            message: self.message().into_owned(),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<K: KindSet> VariantError<K> {
    /// Re-tag the payload under `Target`, which must contain every kind of `K`
    /// in any order.
    ///
    /// ```rust
    /// use std::io;
    /// use std::num::TryFromIntError;
    /// use variant_error::VariantError;
    ///
    /// let err: VariantError<(TryFromIntError,)> = u8::try_from(300i32).unwrap_err().into();
    /// let wide = err.cast_to::<(io::Error, TryFromIntError), _>();
    /// assert!(wide.is::<TryFromIntError, _>());
    /// ```
    ///
    /// A target that misses a kind is rejected at compile time:
    ///
    /// ```compile_fail
    /// use std::io;
    /// use std::num::TryFromIntError;
    /// use variant_error::VariantError;
    ///
    /// let err: VariantError<(TryFromIntError,)> = u8::try_from(300i32).unwrap_err().into();
    /// let _ = err.cast_to::<(io::Error,), _>();
    /// ```
    ///
    /// So is a target that holds a kind of `K` twice:
    ///
    /// ```compile_fail
    /// use std::fmt;
    /// use variant_error::VariantError;
    ///
    /// let err = VariantError::<(fmt::Error,)>::from(fmt::Error);
    /// let _ = err.cast_to::<(fmt::Error, fmt::Error), _>();
    /// ```
    #[inline]
    pub fn cast_to<Target, I>(self) -> VariantError<Target>
    where
        Target: KindSet,
        K: SubsetOf<Target, I>,
    {
        trace_conversion!("cast_to", K, Target, self.kind_name());
        VariantError {
            inner: <K as SubsetOf<Target, I>>::cast(self.inner),
        }
    }

    /// Widen the set by prepending `N`. The payload keeps its kind; its
    /// discriminant moves up by one.
    #[inline]
    pub fn cast_add_front<N>(self) -> VariantError<PushFront<K, N>>
    where
        N: Kind,
        Cons<N, K::Repr>: IntoSet,
    {
        trace_conversion!("cast_add_front", K, PushFront<K, N>, self.kind_name());
        VariantError {
            inner: Cons::Tail(self.inner),
        }
    }

    /// Widen the set by appending `N`. The payload and its discriminant are
    /// unchanged.
    #[inline]
    pub fn cast_add_back<N>(self) -> VariantError<PushBack<K, N>>
    where
        N: Kind,
        K::Repr: Append<N>,
        <K::Repr as Append<N>>::Output: IntoSet,
    {
        trace_conversion!("cast_add_back", K, PushBack<K, N>, self.kind_name());
        VariantError {
            inner: self.inner.append(),
        }
    }

    /// Take the payload if the active kind is `T`; otherwise return the same
    /// payload under the set without `T`.
    ///
    /// ```rust
    /// use std::fmt;
    /// use std::io;
    /// use variant_error::VariantError;
    ///
    /// let err = VariantError::<(io::Error, fmt::Error)>::new(fmt::Error);
    /// let rest: VariantError<(fmt::Error,)> = err.narrow::<io::Error, _>().unwrap_err();
    /// assert_eq!(rest.into_inner(), fmt::Error);
    /// ```
    ///
    /// Narrowing away a kind held twice does not compile:
    ///
    /// ```compile_fail
    /// use std::fmt;
    /// use variant_error::VariantError;
    ///
    /// let err = VariantError::<(fmt::Error,)>::from(fmt::Error).cast_add_back::<fmt::Error>();
    /// let _ = err.narrow::<fmt::Error, _>();
    /// ```
    #[inline]
    pub fn narrow<T, I>(self) -> Result<T, VariantError<Narrowed<K, T, I>>>
    where
        K::Repr: Contains<T, I>,
        <K::Repr as Contains<T, I>>::Remainder: IntoSet,
    {
        trace_conversion!("narrow", K, Narrowed<K, T, I>, self.kind_name());
        <K::Repr as Contains<T, I>>::uninject(self.inner)
            .map_err(|inner| VariantError::<Narrowed<K, T, I>> { inner })
    }
}

// ============================================================================
// Standard Traits
// ============================================================================

impl<K: KindSet> fmt::Debug for VariantError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantError")
            .field("kind", &self.kind_name())
            .field("payload", self.inner.payload())
            .finish()
    }
}

impl<K: KindSet> fmt::Display for VariantError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl<K: KindSet> std::error::Error for VariantError<K> {}

impl<K: KindSet> Clone for VariantError<K>
where
    K::Repr: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K: KindSet> Copy for VariantError<K> where K::Repr: Copy {}

impl<K: KindSet> PartialEq for VariantError<K>
where
    K::Repr: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: KindSet> Eq for VariantError<K> where K::Repr: Eq {}

impl<K: KindSet> Hash for VariantError<K>
where
    K::Repr: Hash,
{
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.inner.hash(state);
    }
}
