use std::fmt;

use optvalue_core::{type_info::pretty_type_name, Reason};

/// Why a sequence or collection helper found nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeqReason {
    KeyNotFound,
    IndexNotFound,
    CollectionWasEmpty,
    NoMatchingElement,
}

impl fmt::Display for SeqReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SeqReason::KeyNotFound => "key not found",
            SeqReason::IndexNotFound => "index not found",
            SeqReason::CollectionWasEmpty => "collection was empty",
            SeqReason::NoMatchingElement => "no matching element found",
        })
    }
}

impl From<SeqReason> for Reason {
    fn from(value: SeqReason) -> Self {
        Reason::new(value)
    }
}

/// A string could not be parsed as the named type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParseReason {
    type_name: &'static str,
}

impl ParseReason {
    pub fn of<T: ?Sized>() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// The full name of the target type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for ParseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not be parsed as {}", pretty_type_name(self.type_name))
    }
}

impl From<ParseReason> for Reason {
    fn from(value: ParseReason) -> Self {
        Reason::new(value)
    }
}
