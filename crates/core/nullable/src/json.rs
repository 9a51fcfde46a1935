use std::any::type_name;

use log::debug;
use nullable_result::{create_error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Nullable;

/// Encodes null and absent as the null token, presence has no wire form of its own
impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Value(value) => value.serialize(serializer),
            _ => serializer.serialize_none(),
        }
    }
}

/// Only called for keys the parent decoder saw, so the result is always present.
///
/// Struct fields need `#[serde(default)]` for missing keys to stay
/// [`Nullable::Absent`], otherwise serde reports them as null.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut place = Nullable::Absent;
        Self::deserialize_in_place(deserializer, &mut place)?;
        Ok(place)
    }

    fn deserialize_in_place<D: Deserializer<'de>>(
        deserializer: D,
        place: &mut Self,
    ) -> Result<(), D::Error> {
        place.clear();

        match Option::<T>::deserialize(deserializer) {
            Ok(Some(value)) => {
                place.set(value);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(error) => {
                debug!("failed to decode {}: {error}", type_name::<T>());
                Err(error)
            }
        }
    }
}

impl<T> Nullable<T> {
    /// Decode a single JSON fragment into this nullable.
    ///
    /// The nullable is marked present before anything is read, so a
    /// malformed fragment leaves it as [`Nullable::Null`] alongside the error.
    pub fn decode_json(&mut self, fragment: &str) -> Result<()>
    where
        T: DeserializeOwned,
    {
        let mut deserializer = serde_json::Deserializer::from_str(fragment);

        Self::deserialize_in_place(&mut deserializer, self)
            .and_then(|_| deserializer.end())
            .map_err(|e| {
                self.clear();
                create_error!(DeserializationError {
                    error: e.to_string()
                })
            })
    }

    /// Encode this nullable as JSON, ignoring presence
    pub fn encode_json(&self) -> Result<String>
    where
        T: Serialize,
    {
        serde_json::to_string(self).map_err(|e| {
            create_error!(SerializationError {
                error: e.to_string()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use nullable_result::ErrorType;
    use serde::{Deserialize, Serialize};

    use crate::Nullable;

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    struct Embed {
        title: String,
        colour: Option<String>,
    }

    #[test]
    fn encode_value_matches_inner_encoder() {
        let embed = Embed {
            title: "Release".to_string(),
            colour: None,
        };

        assert_eq!(
            serde_json::to_string(&Nullable::from(embed.clone())).unwrap(),
            serde_json::to_string(&embed).unwrap()
        );
        assert_eq!(serde_json::to_string(&Nullable::from(10)).unwrap(), "10");
    }

    #[test]
    fn encode_null_and_absent_as_null() {
        assert_eq!(serde_json::to_string(&Nullable::<i32>::null()).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Nullable::<i32>::absent()).unwrap(), "null");
    }

    #[test]
    fn decode_null_token() {
        let n: Nullable<i32> = serde_json::from_str("null").unwrap();
        assert_eq!(n, Nullable::Null);
    }

    #[test]
    fn decode_value() {
        let n: Nullable<Vec<u8>> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(n, Nullable::Value(vec![1, 2, 3]));
    }

    #[test]
    fn round_trip_value() {
        let embed = Nullable::from(Embed {
            title: "Hello".to_string(),
            colour: Some("#ff0000".to_string()),
        });

        let encoded = serde_json::to_string(&embed).unwrap();
        let decoded: Nullable<Embed> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, embed);
    }

    #[test]
    fn decode_error_propagates() {
        let result = serde_json::from_str::<Nullable<i32>>(r#""bad""#);
        assert!(result.is_err());
    }

    #[test]
    fn decode_json_in_place() {
        let mut n = Nullable::<i32>::absent();
        n.decode_json("10").unwrap();
        assert_eq!(n, Nullable::Value(10));

        n.decode_json("null").unwrap();
        assert_eq!(n, Nullable::Null);
    }

    #[test]
    fn decode_json_failure_leaves_present_null() {
        let mut n = Nullable::from(5);
        let error = n.decode_json(r#""bad""#).unwrap_err();

        assert!(matches!(
            error.error_type,
            ErrorType::DeserializationError { .. }
        ));
        assert!(n.is_present());
        assert!(!n.has_value());
    }

    #[test]
    fn decode_json_rejects_trailing_input() {
        let mut n = Nullable::<i32>::absent();
        assert!(n.decode_json("10 11").is_err());
        assert_eq!(n, Nullable::Null);
    }

    #[test]
    fn encode_json_helper() {
        assert_eq!(Nullable::from("hi").encode_json().unwrap(), r#""hi""#);
        assert_eq!(Nullable::<bool>::Absent.encode_json().unwrap(), "null");
    }

    #[test]
    fn encode_json_reports_errors() {
        let mut map = BTreeMap::new();
        map.insert(vec![1u8], 1);

        let error = Nullable::from(map).encode_json().unwrap_err();
        assert!(matches!(error.error_type, ErrorType::SerializationError { .. }));
    }
}
