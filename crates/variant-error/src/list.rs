//! Type-level lists of error kinds
//!
//! A kind set is represented internally as a nested sum type: `Cons<A, Cons<B, Nil>>`
//! holds either an `A` (`Head`) or something from the rest of the list (`Tail`).
//! `Nil` is uninhabited, so a value always sits at exactly one position.
//!
//! Membership and subset tests are trait resolutions. The position of a kind is
//! an inferred index type (`Here`, `There<Here>`, ...), which makes every lookup
//! order-insensitive and fully resolved at compile time.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::kind::Kind;
use crate::sealed::Sealed;
use crate::set::KindSet;

// ============================================================================
// List Types
// ============================================================================

/// A non-empty kind list whose active payload is the head or lies in the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cons<H, T> {
    Head(H),
    Tail(T),
}

/// The empty kind list. It has no values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nil {}

/// Index of the head position.
pub struct Here;

/// Index of a position inside the tail.
pub struct There<I>(PhantomData<I>);

impl Sealed for Nil {}
impl<H, T> Sealed for Cons<H, T> {}

// ============================================================================
// Run-time Dispatch
// ============================================================================

/// Operations over whichever kind is active, dispatched by matching on the
/// closed list.
pub trait KindList: Sealed {
    /// Number of kinds in the list.
    const LEN: usize;

    /// Zero-based position of the active kind.
    fn discriminant(&self) -> usize;

    /// Type name of the active kind.
    fn kind_name(&self) -> &'static str;

    /// Message of the active payload.
    fn message(&self) -> Cow<'_, str>;

    /// The active payload, for debug output.
    fn payload(&self) -> &dyn fmt::Debug;

    /// Push the name of every kind in the list, in order.
    fn collect_names(names: &mut Vec<&'static str>);
}

impl KindList for Nil {
    const LEN: usize = 0;

    fn discriminant(&self) -> usize {
        match *self {}
    }

    fn kind_name(&self) -> &'static str {
        match *self {}
    }

    fn message(&self) -> Cow<'_, str> {
        match *self {}
    }

    fn payload(&self) -> &dyn fmt::Debug {
        match *self {}
    }

    fn collect_names(_names: &mut Vec<&'static str>) {}
}

impl<H: Kind, T: KindList> KindList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;

    #[inline]
    fn discriminant(&self) -> usize {
        match self {
            Cons::Head(_) => 0,
            Cons::Tail(tail) => 1 + tail.discriminant(),
        }
    }

    #[inline]
    fn kind_name(&self) -> &'static str {
        match self {
            Cons::Head(_) => type_name::<H>(),
            Cons::Tail(tail) => tail.kind_name(),
        }
    }

    #[inline]
    fn message(&self) -> Cow<'_, str> {
        match self {
            Cons::Head(head) => head.message(),
            Cons::Tail(tail) => tail.message(),
        }
    }

    fn payload(&self) -> &dyn fmt::Debug {
        match self {
            Cons::Head(head) => head,
            Cons::Tail(tail) => tail.payload(),
        }
    }

    fn collect_names(names: &mut Vec<&'static str>) {
        names.push(type_name::<H>());
        T::collect_names(names);
    }
}

// ============================================================================
// Membership
// ============================================================================

/// `T` is a member of this list at position `I`.
///
/// `I` is inferred. When `T` occurs twice the position is ambiguous and the
/// lookup fails to compile.
#[diagnostic::on_unimplemented(
    message = "`{T}` is not one of the kinds in this kind set",
    label = "kind `{T}` is missing here",
    note = "add `{T}` to the kind set or widen it with `cast_add_front`/`cast_add_back`"
)]
pub trait Contains<T, I>: Sealed + Sized {
    /// The list with `T` removed.
    type Remainder;

    /// Place `value` at the position of `T`.
    fn inject(value: T) -> Self;

    /// Borrow the payload if `T` is active.
    fn get(&self) -> Option<&T>;

    /// Take the payload if `T` is active, or re-tag it under the remainder.
    fn uninject(self) -> Result<T, Self::Remainder>;
}

impl<T, Tail> Contains<T, Here> for Cons<T, Tail> {
    type Remainder = Tail;

    #[inline]
    fn inject(value: T) -> Self {
        Cons::Head(value)
    }

    #[inline]
    fn get(&self) -> Option<&T> {
        match self {
            Cons::Head(value) => Some(value),
            Cons::Tail(_) => None,
        }
    }

    #[inline]
    fn uninject(self) -> Result<T, Tail> {
        match self {
            Cons::Head(value) => Ok(value),
            Cons::Tail(rest) => Err(rest),
        }
    }
}

impl<H, T, Tail, I> Contains<T, There<I>> for Cons<H, Tail>
where
    Tail: Contains<T, I>,
{
    type Remainder = Cons<H, Tail::Remainder>;

    #[inline]
    fn inject(value: T) -> Self {
        Cons::Tail(Tail::inject(value))
    }

    #[inline]
    fn get(&self) -> Option<&T> {
        match self {
            Cons::Head(_) => None,
            Cons::Tail(tail) => tail.get(),
        }
    }

    #[inline]
    fn uninject(self) -> Result<T, Self::Remainder> {
        match self {
            Cons::Head(head) => Err(Cons::Head(head)),
            Cons::Tail(tail) => tail.uninject().map_err(Cons::Tail),
        }
    }
}

// ============================================================================
// Subset
// ============================================================================

/// Every kind of this list is a member of `Target`, at the positions `Indices`.
///
/// Order in either list does not matter; each source kind is looked up in
/// `Target` on its own.
pub trait Subset<Target, Indices>: Sealed {
    /// Re-tag the active payload under `Target`.
    fn embed(self) -> Target;
}

impl<Target> Subset<Target, ()> for Nil {
    fn embed(self) -> Target {
        match self {}
    }
}

impl<H, Tail, Target, IH, ITail> Subset<Target, (IH, ITail)> for Cons<H, Tail>
where
    Target: Contains<H, IH>,
    Tail: Subset<Target, ITail>,
{
    #[inline]
    fn embed(self) -> Target {
        match self {
            Cons::Head(head) => Target::inject(head),
            Cons::Tail(tail) => tail.embed(),
        }
    }
}

// ============================================================================
// Append
// ============================================================================

/// This list with `N` added at the end.
pub trait Append<N>: Sealed {
    type Output;

    /// Carry the active payload over to the longer list.
    fn append(self) -> Self::Output;
}

impl<N> Append<N> for Nil {
    type Output = Cons<N, Nil>;

    fn append(self) -> Self::Output {
        match self {}
    }
}

impl<H, Tail, N> Append<N> for Cons<H, Tail>
where
    Tail: Append<N>,
{
    type Output = Cons<H, Tail::Output>;

    #[inline]
    fn append(self) -> Self::Output {
        match self {
            Cons::Head(head) => Cons::Head(head),
            Cons::Tail(tail) => Cons::Tail(tail.append()),
        }
    }
}

// ============================================================================
// Back to the Tuple Form
// ============================================================================

/// Maps a list back to the tuple kind set it represents.
pub trait IntoSet: KindList {
    type Set: KindSet<Repr = Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct A(&'static str);
    #[derive(Debug, Clone, PartialEq)]
    struct B(u32);
    #[derive(Debug, Clone, PartialEq)]
    struct C;

    impl Kind for A {
        fn message(&self) -> Cow<'_, str> {
            Cow::Borrowed(self.0)
        }
    }

    impl Kind for B {
        fn message(&self) -> Cow<'_, str> {
            Cow::Owned(format!("code {}", self.0))
        }
    }

    impl Kind for C {
        fn message(&self) -> Cow<'_, str> {
            Cow::Borrowed("c")
        }
    }

    type Abc = Cons<A, Cons<B, Cons<C, Nil>>>;
    type Cba = Cons<C, Cons<B, Cons<A, Nil>>>;

    #[test]
    fn test_len() {
        assert_eq!(<Nil as KindList>::LEN, 0);
        assert_eq!(<Abc as KindList>::LEN, 3);
    }

    #[test]
    fn test_inject_position() {
        assert_eq!(Abc::inject(A("a")).discriminant(), 0);
        assert_eq!(Abc::inject(B(7)).discriminant(), 1);
        assert_eq!(Abc::inject(C).discriminant(), 2);
    }

    #[test]
    fn test_dispatch() {
        let list = Abc::inject(B(7));
        assert_eq!(list.message(), "code 7");
        assert!(list.kind_name().ends_with("B"));
        assert_eq!(format!("{:?}", list.payload()), "B(7)");
    }

    #[test]
    fn test_get() {
        let list = Abc::inject(A("x"));
        assert_eq!(Contains::<A, _>::get(&list), Some(&A("x")));
        assert_eq!(Contains::<B, _>::get(&list), None);
    }

    #[test]
    fn test_uninject_hit_and_miss() {
        let list = Abc::inject(C);
        let rest = match Contains::<A, _>::uninject(list) {
            Ok(_) => panic!("A is not active"),
            Err(rest) => rest,
        };
        let rest: Cons<B, Cons<C, Nil>> = rest;
        assert_eq!(rest.discriminant(), 1);
        assert_eq!(Contains::<C, _>::uninject(rest).ok(), Some(C));
    }

    #[test]
    fn test_embed_reverses_order() {
        let list = Abc::inject(A("moved"));
        let reversed: Cba = list.embed();
        assert_eq!(reversed.discriminant(), 2);
        assert_eq!(reversed.message(), "moved");
    }

    #[test]
    fn test_embed_into_self() {
        let list = Abc::inject(B(1));
        let same: Abc = list.clone().embed();
        assert_eq!(same, list);
    }

    #[test]
    fn test_append_keeps_position() {
        let list = Cons::<A, Cons<B, Nil>>::inject(B(3));
        let longer: Cons<A, Cons<B, Cons<C, Nil>>> = list.append();
        assert_eq!(longer.discriminant(), 1);
        assert_eq!(longer.message(), "code 3");
    }

    #[test]
    fn test_collect_names() {
        let mut names = Vec::new();
        <Cba as KindList>::collect_names(&mut names);
        assert_eq!(names.len(), 3);
        assert!(names[0].ends_with("C"));
        assert!(names[2].ends_with("A"));
    }
}
