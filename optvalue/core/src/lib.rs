//! Optional values that remember why they are missing.
//!
//! [`Optional<T>`] is either present, holding a `T`, or absent with a
//! [`Reason`]. Reasons are diagnostic only: two absent optionals are always
//! equal, even across inner types when compared through [`AnyOptional`].

pub mod any;
pub mod error;
pub mod none;
pub mod optional;
pub mod reason;
pub mod runtime;
pub mod type_info;

#[cfg(feature = "serde")]
mod serde_support;

#[cfg(test)]
mod laws;

pub use crate::any::AnyOptional;
pub use crate::error::{ArgumentError, Error, InvalidCastError, InvalidTypeError, MissingValueError};
pub use crate::none::{UntypedNone, NONE};
pub use crate::optional::{FlattenOptional, OptionExt, Optional, OptionalExt, NONE_HASH};
pub use crate::reason::{MissingReason, Reason};
pub use crate::type_info::TypeInfo;

// CONSTRUCTION
// ===================

/// A present optional holding `value`.
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::some(value)
}

/// An absent optional with no reason specified.
pub const fn none<T>() -> Optional<T> {
    Optional::none()
}

/// Same as [`none`], for call sites that read better with the type up front.
pub const fn none_of<T>() -> Optional<T> {
    Optional::none()
}

pub fn none_with_reason<T, R: Into<Reason>>(reason: R) -> Optional<T> {
    Optional::none_with_reason(reason)
}

/// The untyped none token.
pub const fn none_token() -> UntypedNone {
    NONE
}

pub fn none_token_with_reason<R: Into<Reason>>(reason: R) -> UntypedNone {
    UntypedNone::with_reason(reason)
}
