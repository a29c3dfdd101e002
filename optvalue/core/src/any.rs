//! Type-erased access to optionals of any inner type.

use std::{any::Any, fmt};

use crate::{
    error::MissingValueError, none::UntypedNone, optional::Optional, reason::Reason,
    type_info::TypeInfo,
};

/// The capability set shared by every optional, whatever its inner type.
///
/// Implemented by [`Optional<T>`] for any `'static` comparable `T` and by
/// [`UntypedNone`]. Two `dyn AnyOptional` values compare equal when both are
/// absent, or when both hold equal values of the same type.
pub trait AnyOptional: fmt::Debug {
    fn has_value(&self) -> bool;

    /// Borrows the inner value as [`Any`].
    ///
    /// # Errors
    /// Returns [`MissingValueError`] if no value is present.
    fn erased_value(&self) -> Result<&dyn Any, MissingValueError>;

    /// The declared inner type, or `None` for the untyped none token.
    fn declared_type(&self) -> Option<TypeInfo>;

    /// The reason for absence, or `None` if a value is present.
    fn reason(&self) -> Option<Reason>;

    /// The concrete optional as [`Any`], for downcasting.
    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    #[doc(hidden)]
    fn value_eq(&self, other: &dyn Any) -> bool;

    fn to_debug_string(&self) -> String {
        format!("{self:?}")
    }
}

impl<T> AnyOptional for Optional<T>
where
    T: Any + PartialEq + fmt::Debug,
{
    fn has_value(&self) -> bool {
        Optional::has_value(self)
    }

    fn erased_value(&self) -> Result<&dyn Any, MissingValueError> {
        self.value().map(|value| value as &dyn Any)
    }

    fn declared_type(&self) -> Option<TypeInfo> {
        Some(TypeInfo::of::<T>())
    }

    fn reason(&self) -> Option<Reason> {
        Optional::reason(self).cloned()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn value_eq(&self, other: &dyn Any) -> bool {
        Optional::value_eq(self, other)
    }
}

impl AnyOptional for UntypedNone {
    fn has_value(&self) -> bool {
        false
    }

    fn erased_value(&self) -> Result<&dyn Any, MissingValueError> {
        Err(MissingValueError::new(None, UntypedNone::reason(self)))
    }

    fn declared_type(&self) -> Option<TypeInfo> {
        None
    }

    fn reason(&self) -> Option<Reason> {
        Some(UntypedNone::reason(self))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn value_eq(&self, _other: &dyn Any) -> bool {
        false
    }
}

impl<'a> dyn AnyOptional + 'a {
    pub fn is<O: AnyOptional + 'static>(&self) -> bool {
        self.as_any().is::<O>()
    }

    /// Recovers the concrete optional, e.g. `Optional<i32>`.
    pub fn downcast_ref<O: AnyOptional + 'static>(&self) -> Option<&O> {
        self.as_any().downcast_ref()
    }

    /// Borrows the inner value if it is present and of type `T`.
    pub fn value_as<T: 'static>(&self) -> Option<&T> {
        self.erased_value().ok()?.downcast_ref()
    }
}

impl<'a, 'b> PartialEq<dyn AnyOptional + 'b> for dyn AnyOptional + 'a {
    fn eq(&self, other: &(dyn AnyOptional + 'b)) -> bool {
        match (self.has_value(), other.erased_value()) {
            (true, Ok(value)) => self.value_eq(value),
            (false, Err(_)) => true,
            _ => false,
        }
    }
}

impl<'a> PartialEq<UntypedNone> for dyn AnyOptional + 'a {
    fn eq(&self, _other: &UntypedNone) -> bool {
        !self.has_value()
    }
}

impl<'a> PartialEq<dyn AnyOptional + 'a> for UntypedNone {
    fn eq(&self, other: &(dyn AnyOptional + 'a)) -> bool {
        !other.has_value()
    }
}
