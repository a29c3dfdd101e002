//! Construction of optionals from dynamically typed values.
//!
//! Generic instantiation cannot happen at runtime, so every type that should
//! be constructible has to be registered up front. The registry then builds
//! `Optional<T>` values behind a [`dyn AnyOptional`](AnyOptional).

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    fmt,
};

use crate::{
    any::AnyOptional, error::InvalidTypeError, optional::Optional, reason::Reason,
    type_info::TypeInfo,
};

type SomeFn = fn(Box<dyn Any>) -> Result<Box<dyn AnyOptional>, Box<dyn Any>>;
type NoneFn = fn(Reason) -> Box<dyn AnyOptional>;

#[derive(Clone, Copy)]
struct Constructors {
    info: TypeInfo,
    some: SomeFn,
    none: NoneFn,
}

/// A table of optional constructors keyed by [`TypeId`].
#[derive(Clone, Default)]
pub struct TypeRegistry {
    entries: HashMap<TypeId, Constructors>,
}

impl TypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every primitive type, `String` and `&'static str`.
    pub fn with_primitives() -> Self {
        let mut registry = Self::new();
        registry
            .register::<i8>()
            .register::<i16>()
            .register::<i32>()
            .register::<i64>()
            .register::<i128>()
            .register::<isize>()
            .register::<u8>()
            .register::<u16>()
            .register::<u32>()
            .register::<u64>()
            .register::<u128>()
            .register::<usize>()
            .register::<f32>()
            .register::<f64>()
            .register::<bool>()
            .register::<char>()
            .register::<String>()
            .register::<&'static str>();
        registry
    }

    /// Makes `T` constructible. Registering a type twice has no effect.
    pub fn register<T>(&mut self) -> &mut Self
    where
        T: Any + PartialEq + fmt::Debug,
    {
        let info = TypeInfo::of::<T>();
        self.entries.entry(info.id()).or_insert_with(|| {
            log::debug!("registering runtime constructors for {info}");
            Constructors {
                info,
                some: |value| {
                    value
                        .downcast::<T>()
                        .map(|value| Box::new(Optional::some(*value)) as Box<dyn AnyOptional>)
                },
                none: |reason| {
                    Box::new(Optional::<T>::none_with_reason(reason)) as Box<dyn AnyOptional>
                },
            }
        });
        self
    }

    pub fn contains(&self, ty: TypeInfo) -> bool {
        self.entries.contains_key(&ty.id())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wraps `value` in a present optional of its runtime type.
    ///
    /// `declared` overrides the inner type; it must be exactly the runtime
    /// type of `value`.
    ///
    /// # Errors
    /// - [`InvalidTypeError::Incompatible`] if `declared` is not the runtime
    ///   type of `value`.
    /// - [`InvalidTypeError::Unregistered`] if the inner type was never
    ///   registered.
    pub fn create_some(
        &self,
        value: Box<dyn Any>,
        declared: Option<TypeInfo>,
    ) -> Result<Box<dyn AnyOptional>, InvalidTypeError> {
        let actual = (*value).type_id();
        let requested = declared.map_or(actual, |ty| ty.id());

        let entry = self.entries.get(&requested).ok_or_else(|| {
            InvalidTypeError::Unregistered {
                requested: match declared {
                    Some(ty) => ty.pretty_name(),
                    None => String::from("of the value"),
                },
            }
        })?;

        if requested != actual {
            let actual = self
                .entries
                .get(&actual)
                .map_or_else(|| String::from("an unregistered type"), |e| e.info.pretty_name());
            log::debug!(
                "refusing to construct an optional of {} from a value of {actual}",
                entry.info
            );
            return Err(InvalidTypeError::Incompatible {
                requested: entry.info.pretty_name(),
                actual,
            });
        }

        (entry.some)(value).map_err(|_| InvalidTypeError::Incompatible {
            requested: entry.info.pretty_name(),
            actual: String::from("an unregistered type"),
        })
    }

    /// Builds an absent optional of the declared type.
    ///
    /// # Errors
    /// Returns [`InvalidTypeError::Unregistered`] if `declared` was never
    /// registered.
    pub fn create_none(
        &self,
        declared: TypeInfo,
        reason: Option<Reason>,
    ) -> Result<Box<dyn AnyOptional>, InvalidTypeError> {
        let entry = self
            .entries
            .get(&declared.id())
            .ok_or_else(|| InvalidTypeError::Unregistered {
                requested: declared.pretty_name(),
            })?;
        Ok((entry.none)(reason.unwrap_or_default()))
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.entries.values().map(|entry| entry.info))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{reason::MissingReason, some};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[derive(Debug, PartialEq)]
    struct Port(u16);

    #[test]
    fn creates_some_of_runtime_type() {
        init();
        let registry = TypeRegistry::with_primitives();
        let opt = registry.create_some(Box::new(42_i32), None).unwrap();
        assert!(opt.has_value());
        assert_eq!(opt.declared_type(), Some(TypeInfo::of::<i32>()));
        assert_eq!(opt.downcast_ref::<Optional<i32>>(), Some(&some(42)));
    }

    #[test]
    fn honours_matching_override() {
        let registry = TypeRegistry::with_primitives();
        let opt = registry
            .create_some(Box::new(String::from("a")), Some(TypeInfo::of::<String>()))
            .unwrap();
        assert_eq!(opt.value_as::<String>().map(String::as_str), Some("a"));
    }

    #[test]
    fn rejects_incompatible_override() {
        init();
        let registry = TypeRegistry::with_primitives();
        let err = registry
            .create_some(Box::new(1_u8), Some(TypeInfo::of::<String>()))
            .unwrap_err();
        assert_eq!(
            err,
            InvalidTypeError::Incompatible {
                requested: String::from("String"),
                actual: String::from("u8"),
            }
        );
    }

    #[test]
    fn rejects_unregistered_types() {
        let registry = TypeRegistry::with_primitives();
        let err = registry.create_some(Box::new(Port(80)), None).unwrap_err();
        assert!(matches!(err, InvalidTypeError::Unregistered { .. }));
        assert_eq!(
            err.to_string(),
            "type of the value is not registered for runtime construction"
        );
        assert!(!err.to_string().contains("TypeId"));

        let err = registry
            .create_none(TypeInfo::of::<Port>(), None)
            .unwrap_err();
        assert!(err.to_string().contains("Port"));
    }

    #[test]
    fn user_types_can_be_registered() {
        let mut registry = TypeRegistry::new();
        assert!(registry.is_empty());
        registry.register::<Port>().register::<Port>();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(TypeInfo::of::<Port>()));

        let opt = registry.create_some(Box::new(Port(8080)), None).unwrap();
        assert_eq!(opt.value_as::<Port>(), Some(&Port(8080)));
    }

    #[test]
    fn creates_none_with_reason() {
        let registry = TypeRegistry::with_primitives();
        let opt = registry
            .create_none(TypeInfo::of::<f64>(), Some(MissingReason::ConvertedFromNull.into()))
            .unwrap();
        assert!(!opt.has_value());
        assert_eq!(opt.declared_type(), Some(TypeInfo::of::<f64>()));
        assert_eq!(opt.reason().unwrap(), MissingReason::ConvertedFromNull);

        let opt = registry.create_none(TypeInfo::of::<bool>(), None).unwrap();
        assert_eq!(opt.reason().unwrap(), MissingReason::NoReasonSpecified);
    }
}
