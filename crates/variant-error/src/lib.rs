//! Variant Error
//!
//! A closed union of error kinds with compile-time checked conversions.
//!
//! A function that fails with "A or B" returns `VariantError<(A, B)>`. Callers
//! that expect a wider set of kinds widen it without unwrapping anything:
//!
//! - `cast_to::<Target, _>()` re-tags the payload under any superset, in any order
//! - `cast_add_front::<N>()` / `cast_add_back::<N>()` add one kind to the set
//!
//! Every conversion that compiles preserves the payload exactly. Conversions
//! that could lose a kind do not compile, so there is no run-time failure path.
//!
//! # Example
//!
//! ```rust
//! use std::io;
//! use std::num::TryFromIntError;
//! use variant_error::VariantError;
//!
//! fn narrow_byte(value: i32) -> Result<u8, VariantError<(TryFromIntError,)>> {
//!     Ok(u8::try_from(value)?)
//! }
//!
//! let err = narrow_byte(300).unwrap_err();
//!
//! // Same payload, wider set
//! let wide: VariantError<(TryFromIntError, io::Error)> = err.clone().cast_add_back::<io::Error>();
//! assert_eq!(wide.message(), err.message());
//!
//! // Order of kinds does not matter
//! let reordered = wide.cast_to::<(io::Error, TryFromIntError), _>();
//! assert_eq!(reordered.discriminant(), 1);
//! ```
//!
//! # Features
//!
//! - **tracing**: emit a `trace` event on every conversion
//! - **serde**: `Serialize` for [`ErrorReport`]

/// Records a conversion when the `tracing` feature is enabled.
macro_rules! trace_conversion {
    ($op:literal, $from:ty, $to:ty, $kind:expr) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            op = $op,
            from = std::any::type_name::<$from>(),
            to = std::any::type_name::<$to>(),
            kind = $kind,
            "variant error converted"
        );
    };
}

pub mod convert;
pub mod error;
pub mod kind;
pub mod list;
pub mod report;
pub mod set;

mod sealed {
    pub trait Sealed {}
}

pub use convert::{KindResultExt, SubsetOf, VariantResultExt};
pub use error::VariantError;
pub use kind::Kind;
pub use report::ErrorReport;
pub use set::{ContainsKind, KindSet, Narrowed, PushBack, PushFront, MAX_KINDS};
