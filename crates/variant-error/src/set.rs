//! Kind sets in their public tuple form
//!
//! `(A,)`, `(A, B)`, ... `(A, ..., L)` are kind sets over their element types.
//! `()` is the empty set; a `VariantError<()>` can never exist.

use crate::kind::Kind;
use crate::list::{Append, Cons, Contains, IntoSet, KindList, Nil};
use crate::sealed::Sealed;

/// Largest number of kinds a single kind set can hold.
pub const MAX_KINDS: usize = 12;

/// A fixed, closed set of error kinds.
///
/// Implemented for tuples of up to [`MAX_KINDS`] types that all implement
/// [`Kind`]. Sets are compared as sets: `(A, B)` and `(B, A)` are different
/// types but convert into each other freely.
pub trait KindSet: Sealed + Sized {
    /// The internal list the payload is stored in.
    type Repr: KindList;

    /// Number of kinds in the set, duplicates included.
    const LEN: usize = <Self::Repr as KindList>::LEN;
}

/// The set `K` with `N` prepended.
pub type PushFront<K, N> = <Cons<N, <K as KindSet>::Repr> as IntoSet>::Set;

/// The set `K` with `N` appended.
pub type PushBack<K, N> = <<<K as KindSet>::Repr as Append<N>>::Output as IntoSet>::Set;

/// The set `K` with the kind `T` (found at position `I`) removed.
pub type Narrowed<K, T, I> = <<<K as KindSet>::Repr as Contains<T, I>>::Remainder as IntoSet>::Set;

/// `T` is one of the kinds of this set.
///
/// ```rust
/// use variant_error::ContainsKind;
///
/// fn member<K: ContainsKind<T, I>, T, I>() {}
///
/// member::<(std::fmt::Error, std::io::Error), std::io::Error, _>();
/// ```
pub trait ContainsKind<T, I>: KindSet {}

impl<K, T, I> ContainsKind<T, I> for K
where
    K: KindSet,
    K::Repr: Contains<T, I>,
{
}

macro_rules! kind_list {
    () => { Nil };
    ($head:ident $(, $tail:ident)*) => { Cons<$head, kind_list!($($tail),*)> };
}

macro_rules! kind_sets {
    () => {
        impl Sealed for () {}

        impl KindSet for () {
            type Repr = Nil;
        }

        impl IntoSet for Nil {
            type Set = ();
        }
    };
    ($head:ident $(, $tail:ident)*) => {
        impl<$head: Kind, $($tail: Kind),*> Sealed for ($head, $($tail,)*) {}

        impl<$head: Kind, $($tail: Kind),*> KindSet for ($head, $($tail,)*) {
            type Repr = kind_list!($head $(, $tail)*);
        }

        impl<$head: Kind, $($tail: Kind),*> IntoSet for kind_list!($head $(, $tail)*) {
            type Set = ($head, $($tail,)*);
        }

        kind_sets!($($tail),*);
    };
}

kind_sets!(A, B, C, D, E, F, G, H, I, J, K, L);
