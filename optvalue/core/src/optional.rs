//! The [`Optional`] value type.

use std::{any, fmt};

use crate::{error::MissingValueError, reason::Reason, type_info::pretty_type_name};

mod conversions;
mod equality;
mod transforms;

pub use conversions::{FlattenOptional, OptionExt, OptionalExt};

/// The value hashed for every absent optional, whatever its inner type.
pub const NONE_HASH: u64 = 0;

#[derive(Clone)]
enum State<T> {
    Some(T),
    None(Reason),
}

/// A value of type `T`, or an explicit absence with a [`Reason`].
///
/// The state is fixed at construction. An absent optional never exposes an
/// inner value: [`Optional::value`] reports a [`MissingValueError`] instead.
#[derive(Clone)]
pub struct Optional<T> {
    state: State<T>,
}

impl<T> Optional<T> {
    /// Wraps `value` as a present optional.
    ///
    /// Nullable payloads stay present: `Optional::some(None::<u8>)` has a value.
    pub const fn some(value: T) -> Self {
        Self {
            state: State::Some(value),
        }
    }

    /// An absent optional with the canonical reason.
    pub const fn none() -> Self {
        Self {
            state: State::None(Reason::unspecified()),
        }
    }

    pub fn none_with_reason<R: Into<Reason>>(reason: R) -> Self {
        Self {
            state: State::None(reason.into()),
        }
    }

    pub fn has_value(&self) -> bool {
        matches!(self.state, State::Some(_))
    }

    pub fn is_none(&self) -> bool {
        !self.has_value()
    }

    /// Borrows the inner value.
    ///
    /// # Errors
    /// Returns [`MissingValueError`] with the declared type and reason if
    /// this optional is absent.
    pub fn value(&self) -> Result<&T, MissingValueError> {
        match &self.state {
            State::Some(value) => Ok(value),
            State::None(reason) => Err(self.missing(reason.clone())),
        }
    }

    /// Takes the inner value.
    ///
    /// # Errors
    /// Same as [`Optional::value`].
    pub fn into_value(self) -> Result<T, MissingValueError> {
        match self.state {
            State::Some(value) => Ok(value),
            State::None(reason) => Err(MissingValueError::new(
                Some(any::type_name::<T>()),
                reason,
            )),
        }
    }

    /// The reason for absence, or nothing if a value is present.
    pub fn reason(&self) -> Option<&Reason> {
        match &self.state {
            State::Some(_) => None,
            State::None(reason) => Some(reason),
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match &self.state {
            State::Some(value) => Optional::some(value),
            State::None(reason) => Optional::none_with_reason(reason.clone()),
        }
    }

    /// Converts to a std [`Option`], dropping the reason.
    pub fn into_option(self) -> Option<T> {
        match self.state {
            State::Some(value) => Some(value),
            State::None(_) => None,
        }
    }

    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Renders `Some<TypeName>(value)` or `NoneOf<TypeName>`.
    pub fn to_debug_string(&self) -> String
    where
        T: fmt::Debug,
    {
        format!("{self:?}")
    }

    fn missing(&self, reason: Reason) -> MissingValueError {
        MissingValueError::new(Some(any::type_name::<T>()), reason)
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = pretty_type_name(any::type_name::<T>());
        match &self.state {
            State::Some(value) => write!(f, "Some<{name}>({value:?})"),
            State::None(_) => write!(f, "NoneOf<{name}>"),
        }
    }
}

/// Display-only rendering: the inner value, or nothing when absent.
impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Some(value) => fmt::Display::fmt(value, f),
            State::None(_) => Ok(()),
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
