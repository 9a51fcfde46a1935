use std::any::type_name;

use nullable_result::{create_error, Result};

/// A value that can be absent, explicitly null, or hold a `T`.
///
/// Built for the boundary of structured decoding, where a key that was
/// never sent means something different from a key that was sent as `null`:
///
/// ```
/// use nullable::Nullable;
///
/// #[derive(serde::Deserialize)]
/// struct DataEditUser {
///     #[serde(default)]
///     display_name: Nullable<String>,
/// }
///
/// let data: DataEditUser = serde_json::from_str(r#"{"display_name": null}"#).unwrap();
/// assert!(data.display_name.is_present());
///
/// let data: DataEditUser = serde_json::from_str("{}").unwrap();
/// assert!(data.display_name.is_absent());
/// ```
///
/// The default value is [`Nullable::Absent`], so decoders that skip unseen
/// keys leave the field absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nullable<T> {
    /// Key was never mentioned
    #[default]
    Absent,
    /// Key was mentioned with an explicit null
    Null,
    /// Key was mentioned with a concrete value
    Value(T),
}

impl<T> Nullable<T> {
    /// Create a nullable that is present and holds no value
    pub const fn null() -> Self {
        Nullable::Null
    }

    /// Create a nullable that was never mentioned
    pub const fn absent() -> Self {
        Nullable::Absent
    }

    /// Whether no value is held, regardless of presence
    pub const fn is_null(&self) -> bool {
        !self.has_value()
    }

    /// Whether a value is held
    pub const fn has_value(&self) -> bool {
        matches!(self, Nullable::Value(_))
    }

    /// Whether the key was mentioned, either with a value or with null
    pub const fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Whether the key was never mentioned
    ///
    /// Suitable for `#[serde(skip_serializing_if = "Nullable::is_absent")]`.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Nullable::Absent)
    }

    /// Take the held value.
    ///
    /// # Panics
    ///
    /// Panics if no value is held, naming `T` in the message.
    #[track_caller]
    pub fn value(self) -> T {
        match self {
            Nullable::Value(value) => value,
            _ => panic!("value() called on a null {}", type_name::<T>()),
        }
    }

    /// Take the held value.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if no value is held.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Nullable::Value(value) => value,
            _ => panic!("{msg}"),
        }
    }

    /// Take the held value or the given fallback
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Nullable::Value(value) => value,
            _ => fallback,
        }
    }

    /// Take the held value or compute one, `f` only runs when there is no value
    pub fn value_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Nullable::Value(value) => value,
            _ => f(),
        }
    }

    /// Take the held value or `T::default()`
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Nullable::Value(value) => value,
            _ => T::default(),
        }
    }

    /// Take the held value, or an error naming `T` if there is none
    pub fn try_value(self) -> Result<T> {
        match self {
            Nullable::Value(value) => Ok(value),
            _ => Err(create_error!(NullValue {
                type_name: type_name::<T>().to_string()
            })),
        }
    }

    /// Store a value, marking the nullable as present.
    ///
    /// Any previous value is dropped. Returns a handle to the stored value.
    pub fn set(&mut self, value: T) -> &mut T {
        *self = Nullable::Value(value);

        match self {
            Nullable::Value(value) => value,
            _ => unreachable!(),
        }
    }

    /// Drop any held value, leaving the nullable present but null.
    ///
    /// This never produces [`Nullable::Absent`].
    pub fn clear(&mut self) {
        *self = Nullable::Null;
    }

    /// Borrow the held value without changing presence
    pub const fn as_ref(&self) -> Nullable<&T> {
        match self {
            Nullable::Absent => Nullable::Absent,
            Nullable::Null => Nullable::Null,
            Nullable::Value(value) => Nullable::Value(value),
        }
    }

    /// Mutably borrow the held value without changing presence
    pub fn as_mut(&mut self) -> Nullable<&mut T> {
        match self {
            Nullable::Absent => Nullable::Absent,
            Nullable::Null => Nullable::Null,
            Nullable::Value(value) => Nullable::Value(value),
        }
    }

    /// Map the held value, keeping absent and null as they are
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Nullable::Absent => Nullable::Absent,
            Nullable::Null => Nullable::Null,
            Nullable::Value(value) => Nullable::Value(f(value)),
        }
    }

    /// Drop presence information
    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::Value(value)
    }
}

/// `None` becomes [`Nullable::Null`], an `Option` always counts as present
impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Nullable::Value(value),
            None => Nullable::Null,
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}
