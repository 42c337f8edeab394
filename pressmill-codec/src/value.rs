use crate::policy::Policy;
use crate::wire::WireEnum;
use pressmill_error::codec::CodecError;
use serde_json::Value;
use std::marker::PhantomData;

/// Paired encode/decode operations for one (type, optionality) combination.
///
/// `encode` is total: every in-memory value has a name and a discriminant by
/// construction. Only `decode` can fail.
pub trait Codec {
    type Value;

    /// Converts a wire token into an in-memory value.
    fn decode(&self, wire: &Value) -> Result<Self::Value, CodecError>;

    /// Converts an in-memory value into its canonical wire token.
    fn encode(&self, value: &Self::Value) -> Value;
}

/// Policy-driven codec for a non-optional value of one enumerated type.
///
/// Obtained through [`codec_for`](crate::codec_for); holds no mutable state
/// and is freely shareable across threads.
#[derive(Debug, Clone, Copy)]
pub struct EnumCodec<T: WireEnum> {
    policy: Policy,
    _marker: PhantomData<T>,
}

impl<T: WireEnum> EnumCodec<T> {
    pub(crate) fn new(policy: Policy) -> Self {
        Self {
            policy,
            _marker: PhantomData,
        }
    }

    /// Returns the policy this codec was resolved with.
    #[inline]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    fn unrepresentable(wire: &Value) -> CodecError {
        CodecError::UnrepresentableValue {
            token: render_token(wire),
            type_name: T::TYPE_NAME,
        }
    }

    fn unsupported(wire: &Value) -> CodecError {
        CodecError::UnsupportedToken {
            token: render_token(wire),
            type_name: T::TYPE_NAME,
        }
    }

    /// Maps an integer token to the constant with that discriminant. An
    /// integer with no declared constant is unrepresentable, not silently
    /// constructed.
    fn from_integer(wire: &Value, raw: i64) -> Result<T, CodecError> {
        i16::try_from(raw)
            .ok()
            .and_then(T::from_discriminant)
            .ok_or_else(|| Self::unrepresentable(wire))
    }

    /// Integer tokens map through the discriminant; fractional numbers are a
    /// shape violation, integers beyond `i64` are merely out of range.
    fn decode_integer_token(wire: &Value, number: &serde_json::Number) -> Result<T, CodecError> {
        match number.as_i64() {
            Some(raw) => Self::from_integer(wire, raw),
            None if number.is_u64() => Err(Self::unrepresentable(wire)),
            None => Err(Self::unsupported(wire)),
        }
    }

    fn decode_numeric(&self, wire: &Value) -> Result<T, CodecError> {
        match wire {
            Value::Number(number) => Self::decode_integer_token(wire, number),
            Value::String(text) => {
                // String-wrapped integers are accepted; otherwise fall back
                // to the constant names.
                if let Ok(raw) = text.parse::<i64>() {
                    Self::from_integer(wire, raw)
                } else {
                    T::from_name_ignore_case(text).ok_or_else(|| Self::unrepresentable(wire))
                }
            }
            _ => Err(Self::unsupported(wire)),
        }
    }

    fn decode_named(&self, wire: &Value) -> Result<T, CodecError> {
        match wire {
            // Case-insensitive comparison already covers both the declared
            // PascalCase spelling and the lowerCamelCase form emitted on
            // writes.
            Value::String(text) => {
                T::from_name_ignore_case(text).ok_or_else(|| Self::unrepresentable(wire))
            }
            Value::Number(number) => Self::decode_integer_token(wire, number),
            _ => Err(Self::unsupported(wire)),
        }
    }
}

impl<T: WireEnum> Codec for EnumCodec<T> {
    type Value = T;

    fn decode(&self, wire: &Value) -> Result<T, CodecError> {
        match self.policy {
            Policy::Numeric => self.decode_numeric(wire),
            Policy::Named | Policy::DefaultNamed => self.decode_named(wire),
        }
    }

    fn encode(&self, value: &T) -> Value {
        match self.policy {
            Policy::Numeric => Value::from(value.discriminant()),
            Policy::Named | Policy::DefaultNamed => Value::String(lower_first(value.name())),
        }
    }
}

/// Lowers exactly the first character of a constant name, leaving the rest
/// untouched. Intentionally narrow; this is not a general case converter.
fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Renders the offending token for error reporting. Strings are reported
/// unquoted so the caller sees the exact text that failed to match.
fn render_token(wire: &Value) -> String {
    match wire {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
