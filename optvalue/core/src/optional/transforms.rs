// COMBINATORS
// ===================

use std::any::{self, Any};

use crate::{
    error::InvalidCastError,
    reason::{MissingReason, Reason},
    type_info::TypeInfo,
};

use super::{Optional, State};

/// Functions for transforming, filtering and defaulting optionals.
///
/// Absent optionals propagate their reason through every combinator, and
/// caller-supplied closures are never invoked on them.
impl<T> Optional<T> {
    /// Applies `f` to the inner value and wraps the result as present.
    ///
    /// The result is never collapsed: mapping to `None::<U>` yields a present
    /// `Optional<Option<U>>`. Use [`Optional::flatten`] for that.
    pub fn map<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self.state {
            State::Some(value) => Optional::some(f(value)),
            State::None(reason) => Optional::none_with_reason(reason),
        }
    }

    /// Applies `f` to the inner value and returns its result unchanged.
    pub fn and_then<U, F>(self, f: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self.state {
            State::Some(value) => f(value),
            State::None(reason) => Optional::none_with_reason(reason),
        }
    }

    /// Keeps the value only if `predicate` holds, otherwise becomes absent
    /// with [`MissingReason::FailedFilter`].
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter_with_reason(predicate, MissingReason::FailedFilter)
    }

    /// Like [`Optional::filter`], recording `reason` when the predicate fails.
    pub fn filter_with_reason<P, R>(self, predicate: P, reason: R) -> Self
    where
        P: FnOnce(&T) -> bool,
        R: Into<Reason>,
    {
        let keep = match &self.state {
            State::Some(value) => predicate(value),
            State::None(_) => true,
        };
        if keep {
            self
        } else {
            Self::none_with_reason(reason)
        }
    }

    /// Returns the inner value or `default`.
    pub fn or(self, default: T) -> T {
        match self.state {
            State::Some(value) => value,
            State::None(_) => default,
        }
    }

    /// Returns the inner value, calling `factory` only when absent.
    pub fn or_else<F>(self, factory: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self.state {
            State::Some(value) => value,
            State::None(_) => factory(),
        }
    }

    /// Returns `self` if present, otherwise `other` with its own reason.
    pub fn or_maybe(self, other: Self) -> Self {
        if self.has_value() {
            self
        } else {
            other
        }
    }

    /// Replaces the reason of an absent optional. Present optionals are
    /// returned unchanged.
    pub fn with_reason<R: Into<Reason>>(self, reason: R) -> Self {
        match self.state {
            State::Some(_) => self,
            State::None(_) => Self::none_with_reason(reason),
        }
    }

    /// Returns the inner value, or `err` if absent.
    pub fn value_or_error<E>(self, err: E) -> Result<T, E> {
        match self.state {
            State::Some(value) => Ok(value),
            State::None(_) => Err(err),
        }
    }

    /// Returns the inner value, or the error built from the absence reason.
    pub fn value_or_else_error<E, F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce(Reason) -> E,
    {
        match self.state {
            State::Some(value) => Ok(value),
            State::None(reason) => Err(f(reason)),
        }
    }

    /// Runs `f` on the inner value, if any.
    pub fn if_some<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let State::Some(value) = &self.state {
            f(value)
        }
    }

    /// Hard cast to `U` by runtime type.
    ///
    /// The cast succeeds when `T` is `U`, or when `T` is a boxed [`Any`]
    /// holding a `U`. Absent optionals keep their reason.
    ///
    /// # Errors
    /// Returns [`InvalidCastError`] if a present value is not a `U`.
    pub fn cast<U: 'static>(self) -> Result<Optional<U>, InvalidCastError>
    where
        T: 'static,
    {
        match self.state {
            State::Some(value) => downcast_value::<T, U>(value)
                .map(Optional::some)
                .ok_or_else(|| InvalidCastError::new(TypeInfo::of::<T>(), TypeInfo::of::<U>())),
            State::None(reason) => Ok(Optional::none_with_reason(reason)),
        }
    }

    /// Soft cast to `U` by runtime type.
    ///
    /// Same compatibility rules as [`Optional::cast`], but a mismatch yields
    /// an absent optional with [`MissingReason::FailedCast`].
    pub fn try_cast<U: 'static>(self) -> Optional<U>
    where
        T: 'static,
    {
        match self.state {
            State::Some(value) => match downcast_value::<T, U>(value) {
                Some(value) => Optional::some(value),
                None => Optional::none_with_reason(MissingReason::FailedCast {
                    from: any::type_name::<T>(),
                    to: any::type_name::<U>(),
                }),
            },
            State::None(reason) => Optional::none_with_reason(reason),
        }
    }

    /// Converts the inner value with [`TryFrom`].
    ///
    /// # Errors
    /// Returns [`InvalidCastError`] if the conversion fails.
    pub fn convert<U>(self) -> Result<Optional<U>, InvalidCastError>
    where
        T: 'static,
        U: TryFrom<T> + 'static,
    {
        match self.state {
            State::Some(value) => U::try_from(value)
                .map(Optional::some)
                .map_err(|_| InvalidCastError::new(TypeInfo::of::<T>(), TypeInfo::of::<U>())),
            State::None(reason) => Ok(Optional::none_with_reason(reason)),
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// An absent outer optional keeps its reason; a present outer optional
    /// yields the inner one as-is.
    pub fn flatten(self) -> Optional<T> {
        match self.state {
            State::Some(inner) => inner,
            State::None(reason) => Optional::none_with_reason(reason),
        }
    }
}

impl<T> Optional<Option<T>> {
    /// Collapses a present `None` payload into absence with
    /// [`MissingReason::ConvertedFromNull`].
    pub fn flatten(self) -> Optional<T> {
        self.flatten_with_reason(MissingReason::ConvertedFromNull)
    }

    /// Like [`Optional::flatten`], recording `why_null` for a `None` payload.
    pub fn flatten_with_reason<R: Into<Reason>>(self, why_null: R) -> Optional<T> {
        match self.state {
            State::Some(Some(value)) => Optional::some(value),
            State::Some(None) => Optional::none_with_reason(why_null),
            State::None(reason) => Optional::none_with_reason(reason),
        }
    }
}

/// Moves `value` into a `U` if its runtime type allows it: either `T` is
/// `U`, or `T` is a boxed [`Any`] whose payload is a `U`.
fn downcast_value<T: 'static, U: 'static>(value: T) -> Option<U> {
    let mut slot = Some(value);
    let erased = &mut slot as &mut dyn Any;

    if let Some(exact) = erased.downcast_mut::<Option<U>>() {
        return exact.take();
    }
    if let Some(boxed) = erased.downcast_mut::<Option<Box<dyn Any>>>() {
        return boxed.take()?.downcast().ok().map(|value| *value);
    }
    if let Some(boxed) = erased.downcast_mut::<Option<Box<dyn Any + Send>>>() {
        return boxed.take()?.downcast().ok().map(|value| *value);
    }
    if let Some(boxed) = erased.downcast_mut::<Option<Box<dyn Any + Send + Sync>>>() {
        return boxed.take()?.downcast().ok().map(|value| *value);
    }

    None
}
