//! The untyped none token.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    error::MissingValueError,
    optional::{Optional, NONE_HASH},
    reason::Reason,
};

/// An absent value whose type is not yet known.
///
/// The token converts into an absent [`Optional<T>`] of any `T`, keeping its
/// reason, and compares equal to every absent optional.
///
/// ```
/// use optvalue_core::{Optional, NONE};
///
/// let port: Optional<u16> = NONE.into();
/// assert!(!port.has_value());
/// assert_eq!(port, NONE);
/// ```
#[derive(Clone, Default)]
pub struct UntypedNone {
    reason: Option<Reason>,
}

/// The untyped none token without a reason.
pub const NONE: UntypedNone = UntypedNone { reason: None };

impl UntypedNone {
    pub fn with_reason<R: Into<Reason>>(reason: R) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    /// The reason carried by the token. Falls back to the canonical reason.
    pub fn reason(&self) -> Reason {
        self.reason.clone().unwrap_or_default()
    }

    /// Always `false`.
    pub fn has_value(&self) -> bool {
        false
    }

    /// Always fails, since the token never holds a value.
    pub fn value(&self) -> Result<std::convert::Infallible, MissingValueError> {
        Err(MissingValueError::new(None, self.reason()))
    }

    /// Binds the token to a concrete inner type.
    pub fn into_optional<T>(self) -> Optional<T> {
        Optional::none_with_reason(self.reason.unwrap_or_default())
    }

    pub fn to_debug_string(&self) -> String {
        format!("{self:?}")
    }
}

impl<T> From<UntypedNone> for Optional<T> {
    fn from(value: UntypedNone) -> Self {
        value.into_optional()
    }
}

impl fmt::Debug for UntypedNone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NoneOf<*>")
    }
}

impl fmt::Display for UntypedNone {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl PartialEq for UntypedNone {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}
impl Eq for UntypedNone {}

impl<T> PartialEq<Optional<T>> for UntypedNone {
    fn eq(&self, other: &Optional<T>) -> bool {
        !other.has_value()
    }
}

impl<T> PartialEq<UntypedNone> for Optional<T> {
    fn eq(&self, _other: &UntypedNone) -> bool {
        !self.has_value()
    }
}

impl Hash for UntypedNone {
    fn hash<H: Hasher>(&self, state: &mut H) {
        NONE_HASH.hash(state);
    }
}
