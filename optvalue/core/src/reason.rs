//! Reasons attached to absent optionals.

use std::{any::Any, fmt, sync::Arc};

use crate::type_info::pretty_type_name;

/// Library-defined reasons for a missing value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MissingReason {
    /// The optional was created without a reason.
    NoReasonSpecified,
    /// A filter rejected the value and no reason was supplied.
    FailedFilter,
    /// The value was converted from a `None` payload.
    ConvertedFromNull,
    /// A soft cast could not convert between the two types.
    FailedCast {
        from: &'static str,
        to: &'static str,
    },
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingReason::NoReasonSpecified => f.write_str("no reason specified"),
            MissingReason::FailedFilter => f.write_str("failed filter"),
            MissingReason::ConvertedFromNull => f.write_str("converted from null"),
            MissingReason::FailedCast { from, to } => write!(
                f,
                "failed cast from {} to {}",
                pretty_type_name(from),
                pretty_type_name(to)
            ),
        }
    }
}

/// Payload types usable as a [`Reason`].
trait Payload: fmt::Debug + fmt::Display + Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;
}

impl<R> Payload for R
where
    R: fmt::Debug + fmt::Display + Send + Sync + 'static,
{
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Clone)]
enum Repr {
    Missing(MissingReason),
    Custom(Arc<dyn Payload>),
}

/// Describes why an optional has no value.
///
/// A reason is diagnostic only: it never takes part in equality or hashing
/// of the optional carrying it. Cloning is cheap.
#[derive(Clone)]
pub struct Reason(Repr);

impl Reason {
    /// Wraps an arbitrary payload. [`MissingReason`] values are stored inline
    /// and an existing [`Reason`] is returned as is.
    pub fn new<R>(payload: R) -> Self
    where
        R: fmt::Debug + fmt::Display + Send + Sync + 'static,
    {
        let erased = &payload as &dyn Any;
        if let Some(reason) = erased.downcast_ref::<Reason>() {
            return reason.clone();
        }
        match erased.downcast_ref::<MissingReason>() {
            Some(missing) => Self(Repr::Missing(*missing)),
            None => Self(Repr::Custom(Arc::new(payload))),
        }
    }

    /// The canonical reason used when nothing more specific is known.
    pub const fn unspecified() -> Self {
        Self(Repr::Missing(MissingReason::NoReasonSpecified))
    }

    pub const fn missing(reason: MissingReason) -> Self {
        Self(Repr::Missing(reason))
    }

    /// Returns the library-defined reason, if this is one.
    pub fn as_missing(&self) -> Option<MissingReason> {
        match &self.0 {
            Repr::Missing(missing) => Some(*missing),
            Repr::Custom(_) => None,
        }
    }

    pub fn is<R: 'static>(&self) -> bool {
        self.downcast_ref::<R>().is_some()
    }

    pub fn downcast_ref<R: 'static>(&self) -> Option<&R> {
        match &self.0 {
            Repr::Missing(missing) => (missing as &dyn Any).downcast_ref(),
            Repr::Custom(payload) => (**payload).as_any().downcast_ref(),
        }
    }
}

impl Default for Reason {
    fn default() -> Self {
        Self::unspecified()
    }
}

impl fmt::Debug for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Missing(missing) => fmt::Debug::fmt(missing, f),
            Repr::Custom(payload) => fmt::Debug::fmt(payload, f),
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Missing(missing) => fmt::Display::fmt(missing, f),
            Repr::Custom(payload) => fmt::Display::fmt(payload, f),
        }
    }
}

impl PartialEq<MissingReason> for Reason {
    fn eq(&self, other: &MissingReason) -> bool {
        self.as_missing() == Some(*other)
    }
}

impl From<MissingReason> for Reason {
    fn from(value: MissingReason) -> Self {
        Self::missing(value)
    }
}
impl From<&'static str> for Reason {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}
impl From<String> for Reason {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
