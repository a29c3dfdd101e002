// EQUALITY AND HASHING
// ===================
//
// Reasons never take part in either.

use std::{
    any::Any,
    hash::{Hash, Hasher},
};

use crate::any::AnyOptional;

use super::{Optional, State, NONE_HASH};

impl<T: PartialEq> PartialEq for Optional<T> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.state, &other.state) {
            (State::Some(a), State::Some(b)) => a == b,
            (State::None(_), State::None(_)) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Optional<T> {}

/// Absent values hash to [`NONE_HASH`]; present values hash exactly like
/// their inner value.
impl<T: Hash> Hash for Optional<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.state {
            State::Some(value) => value.hash(state),
            State::None(_) => NONE_HASH.hash(state),
        }
    }
}

impl<T> Optional<T> {
    /// Compares against a bare value. Absent optionals never match.
    pub fn eq_value<U>(&self, other: &U) -> bool
    where
        T: PartialEq<U>,
    {
        match &self.state {
            State::Some(value) => value == other,
            State::None(_) => false,
        }
    }

    /// Compares against an optional of any inner type.
    ///
    /// Two absent optionals are always equal. Present optionals are equal
    /// when the other inner value has type `T` and compares equal.
    pub fn eq_any(&self, other: &dyn AnyOptional) -> bool
    where
        T: PartialEq + 'static,
    {
        match &self.state {
            State::Some(_) => other.erased_value().is_ok_and(|v| self.value_eq(v)),
            State::None(_) => !other.has_value(),
        }
    }

    pub(crate) fn value_eq(&self, other: &dyn Any) -> bool
    where
        T: PartialEq + 'static,
    {
        match (&self.state, other.downcast_ref::<T>()) {
            (State::Some(value), Some(other)) => value == other,
            _ => false,
        }
    }
}

impl<'a, T> PartialEq<dyn AnyOptional + 'a> for Optional<T>
where
    T: PartialEq + 'static,
{
    fn eq(&self, other: &(dyn AnyOptional + 'a)) -> bool {
        self.eq_any(other)
    }
}

/// Symmetric equality between optionals and bare values of common types.
macro_rules! impl_concrete_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Optional<$ty> {
                fn eq(&self, other: &$ty) -> bool {
                    self.eq_value(other)
                }
            }

            impl PartialEq<Optional<$ty>> for $ty {
                fn eq(&self, other: &Optional<$ty>) -> bool {
                    other.eq_value(self)
                }
            }
        )*
    };
}

impl_concrete_eq!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl PartialEq<str> for Optional<String> {
    fn eq(&self, other: &str) -> bool {
        matches!(&self.state, State::Some(value) if value.as_str() == other)
    }
}

impl PartialEq<&str> for Optional<String> {
    fn eq(&self, other: &&str) -> bool {
        PartialEq::<str>::eq(self, *other)
    }
}

impl<'a> PartialEq<&'a str> for Optional<&'a str> {
    fn eq(&self, other: &&'a str) -> bool {
        self.eq_value(other)
    }
}
