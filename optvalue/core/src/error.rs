use std::fmt;

use thiserror::Error;

use crate::{
    reason::Reason,
    type_info::{pretty_type_name, TypeInfo},
};

/// Error that occurs when reading the value of an absent optional.
#[derive(Clone, Debug, Error)]
#[error("tried to read the value of an optional of {}, but no value exists: {reason}", DeclaredType(.type_name))]
pub struct MissingValueError {
    type_name: Option<&'static str>,
    reason: Reason,
}

impl MissingValueError {
    /// `type_name` is the full name of the declared inner type, or `None` when
    /// the type is unknown.
    pub fn new(type_name: Option<&'static str>, reason: Reason) -> Self {
        log::trace!("missing value of {}: {}", DeclaredType(&type_name), reason);
        Self { type_name, reason }
    }

    /// The declared inner type of the optional, if it was known.
    pub fn type_name(&self) -> Option<&'static str> {
        self.type_name
    }

    /// The reason carried by the absent optional.
    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}

struct DeclaredType<'a>(&'a Option<&'static str>);

impl fmt::Display for DeclaredType<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(name) => write!(f, "type {}", pretty_type_name(name)),
            None => f.write_str("an unknown type"),
        }
    }
}

/// Error that occurs when a hard cast between two types is impossible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("cannot cast a value of type {from} to type {to}")]
pub struct InvalidCastError {
    from: TypeInfo,
    to: TypeInfo,
}

impl InvalidCastError {
    pub fn new(from: TypeInfo, to: TypeInfo) -> Self {
        Self { from, to }
    }

    pub fn from_type(&self) -> TypeInfo {
        self.from
    }

    pub fn to_type(&self) -> TypeInfo {
        self.to
    }
}

/// Error that may occur while constructing optionals from dynamically typed values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidTypeError {
    /// The requested inner type cannot hold the runtime type of the value.
    #[error("requested type {requested} is incompatible with a value of type {actual}")]
    Incompatible { requested: String, actual: String },
    /// No constructors were registered for the requested type.
    #[error("type {requested} is not registered for runtime construction")]
    Unregistered { requested: String },
}

/// Error raised when an argument violates an operation's contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A sequence expected to hold at most one matching element held more.
    #[error("expected no more than one element")]
    MoreThanOneElement,
}

/// Any error raised by this crate.
#[derive(Clone, Debug, Error)]
pub enum Error {
    #[error("{0}")]
    MissingValue(#[source] MissingValueError),
    #[error("{0}")]
    InvalidCast(#[source] InvalidCastError),
    #[error("{0}")]
    InvalidType(#[source] InvalidTypeError),
    #[error("invalid argument: {0}")]
    Argument(#[source] ArgumentError),
}

impl From<MissingValueError> for Error {
    fn from(value: MissingValueError) -> Self {
        Self::MissingValue(value)
    }
}
impl From<InvalidCastError> for Error {
    fn from(value: InvalidCastError) -> Self {
        Self::InvalidCast(value)
    }
}
impl From<InvalidTypeError> for Error {
    fn from(value: InvalidTypeError) -> Self {
        Self::InvalidType(value)
    }
}
impl From<ArgumentError> for Error {
    fn from(value: ArgumentError) -> Self {
        Self::Argument(value)
    }
}
