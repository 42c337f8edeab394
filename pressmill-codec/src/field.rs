//! Serde field adapters routing enumerated fields through the wire codec.
//!
//! The surrounding serialization layer attaches these per field with
//! `#[serde(with = "pressmill_codec::wire_field")]` (required fields) or
//! `#[serde(default, with = "pressmill_codec::wire_field_opt")]` (optional
//! fields); the codec and its policy are resolved from the field's declared
//! type.

/// Adapter for required enumerated fields.
pub mod wire_field {
    use crate::codec_for;
    use crate::value::Codec;
    use crate::wire::WireEnum;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: WireEnum,
        S: Serializer,
    {
        codec_for::<T>().encode(value).serialize(serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: WireEnum,
        D: Deserializer<'de>,
    {
        let wire = Value::deserialize(deserializer)?;
        codec_for::<T>().decode(&wire).map_err(D::Error::custom)
    }
}

/// Adapter for optional enumerated fields; pair with `#[serde(default)]` so a
/// missing key reads as absent too.
pub mod wire_field_opt {
    use crate::optional_codec_for;
    use crate::value::Codec;
    use crate::wire::WireEnum;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::Value;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: WireEnum,
        S: Serializer,
    {
        optional_codec_for::<T>().encode(value).serialize(serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: WireEnum,
        D: Deserializer<'de>,
    {
        let wire = Value::deserialize(deserializer)?;
        optional_codec_for::<T>()
            .decode(&wire)
            .map_err(D::Error::custom)
    }
}
