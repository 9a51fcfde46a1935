//! Type-erased view of [`Nullable`] for reflection-style validators.
//!
//! A validator that walks fields as `&dyn Any` cannot be generic over `T`, so
//! every `Nullable<T>` it should understand has to be registered with
//! [`CustomTypes`] up front. The registry then turns a field into the value a
//! constraint should see: nothing for absent and null, the inner value
//! otherwise.
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use log::trace;

use crate::Nullable;

/// A nullable with its element type erased
#[derive(Clone, Copy)]
pub struct ErasedNullable<'a> {
    /// Held value, if any
    pub value: Option<&'a dyn Any>,
    /// Whether the key was mentioned
    pub present: bool,
}

impl<'a> ErasedNullable<'a> {
    /// The value a constraint should be checked against
    pub fn effective(self) -> Option<&'a dyn Any> {
        if self.present {
            self.value
        } else {
            None
        }
    }
}

impl fmt::Debug for ErasedNullable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedNullable")
            .field("has_value", &self.value.is_some())
            .field("present", &self.present)
            .finish()
    }
}

/// Types that can produce an [`ErasedNullable`]
pub trait Erase {
    fn erase(&self) -> ErasedNullable<'_>;
}

impl<T: Any> Erase for Nullable<T> {
    fn erase(&self) -> ErasedNullable<'_> {
        match self {
            Nullable::Absent => ErasedNullable {
                value: None,
                present: false,
            },
            Nullable::Null => ErasedNullable {
                value: None,
                present: true,
            },
            Nullable::Value(value) => ErasedNullable {
                value: Some(value as &dyn Any),
                present: true,
            },
        }
    }
}

type Handler = for<'a> fn(&'a dyn Any) -> Option<ErasedNullable<'a>>;

fn erase_any<N: Erase + Any>(field: &dyn Any) -> Option<ErasedNullable<'_>> {
    field.downcast_ref::<N>().map(Erase::erase)
}

struct Registration {
    type_name: &'static str,
    handler: Handler,
}

/// Registry of erasable field types, keyed by their concrete type
#[derive(Default)]
pub struct CustomTypes {
    handlers: HashMap<TypeId, Registration>,
}

impl CustomTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a concrete field type, usually some `Nullable<T>`
    pub fn register<N: Erase + Any>(&mut self) -> &mut Self {
        trace!("registering custom type {}", type_name::<N>());

        self.handlers.insert(
            TypeId::of::<N>(),
            Registration {
                type_name: type_name::<N>(),
                handler: erase_any::<N>,
            },
        );

        self
    }

    /// Whether the field's concrete type has been registered
    pub fn is_registered(&self, field: &dyn Any) -> bool {
        self.handlers.contains_key(&field.type_id())
    }

    /// Erase a registered field, `None` if its type is unknown
    pub fn erase<'a>(&self, field: &'a dyn Any) -> Option<ErasedNullable<'a>> {
        let registration = self.handlers.get(&field.type_id())?;
        (registration.handler)(field)
    }

    /// Resolve the value a constraint should see for this field.
    ///
    /// Registered types yield `None` when absent or null and the inner value
    /// when present. Unregistered fields are handed back unchanged.
    pub fn resolve<'a>(&self, field: &'a dyn Any) -> Option<&'a dyn Any> {
        match self.erase(field) {
            Some(erased) => erased.effective(),
            None => Some(field),
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for CustomTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.handlers.values().map(|r| r.type_name))
            .finish()
    }
}
