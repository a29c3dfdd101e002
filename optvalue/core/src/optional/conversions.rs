// CONVERSIONS
// ===================

use crate::reason::{MissingReason, Reason};

use super::{Optional, State};

/// A std `None` becomes absent with [`MissingReason::ConvertedFromNull`].
impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        value.into_optional_because(MissingReason::ConvertedFromNull)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_option()
    }
}

/// Bare values of common types wrap as present.
macro_rules! impl_from_bare {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Optional<$ty> {
                fn from(value: $ty) -> Self {
                    Self::some(value)
                }
            }
        )*
    };
}

impl_from_bare!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl<'a> From<&'a str> for Optional<&'a str> {
    fn from(value: &'a str) -> Self {
        Self::some(value)
    }
}

/// Wraps any value as a present [`Optional`].
pub trait OptionalExt: Sized {
    fn into_some(self) -> Optional<Self>;
}

impl<T> OptionalExt for T {
    fn into_some(self) -> Optional<Self> {
        Optional::some(self)
    }
}

/// Conversions from std [`Option`] that record why the value is missing.
pub trait OptionExt<T> {
    fn into_optional_because<R: Into<Reason>>(self, why_null: R) -> Optional<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn into_optional_because<R: Into<Reason>>(self, why_null: R) -> Optional<T> {
        match self {
            Some(value) => Optional::some(value),
            None => Optional::none_with_reason(why_null),
        }
    }
}

/// Flattens a std `Option` wrapped around an [`Optional`].
pub trait FlattenOptional<T> {
    /// A std `None` becomes absent with [`MissingReason::ConvertedFromNull`].
    fn flatten_optional(self) -> Optional<T>;

    fn flatten_optional_because<R: Into<Reason>>(self, why_null: R) -> Optional<T>;
}

impl<T> FlattenOptional<T> for Option<Optional<T>> {
    fn flatten_optional(self) -> Optional<T> {
        self.flatten_optional_because(MissingReason::ConvertedFromNull)
    }

    fn flatten_optional_because<R: Into<Reason>>(self, why_null: R) -> Optional<T> {
        match self {
            Some(optional) => optional,
            None => Optional::none_with_reason(why_null),
        }
    }
}

impl<T> Optional<T> {
    /// Maps the reason of an absent optional through `f`.
    pub fn map_reason<F>(self, f: F) -> Self
    where
        F: FnOnce(Reason) -> Reason,
    {
        match self.state {
            State::Some(_) => self,
            State::None(reason) => Self::none_with_reason(f(reason)),
        }
    }
}
