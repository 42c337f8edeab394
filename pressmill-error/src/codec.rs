use thiserror::Error;

/// Classifies wire-codec failures for enumerated fields.
///
/// Both variants carry the offending token text and the target type name so
/// the serialization layer can surface them verbatim; the codec itself never
/// logs or substitutes defaults on failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The token has a legal shape but maps to no constant of the target type
    #[error("value `{token}` is not representable as `{type_name}`")]
    UnrepresentableValue {
        token: String,
        type_name: &'static str,
    },
    /// The token's shape is not one of integer, string or null
    #[error("unsupported wire token `{token}` for `{type_name}`: expected an integer, a string or null")]
    UnsupportedToken {
        token: String,
        type_name: &'static str,
    },
}

impl CodecError {
    /// Returns the name of the enumerated type the failed conversion targeted.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::UnrepresentableValue { type_name, .. } => type_name,
            Self::UnsupportedToken { type_name, .. } => type_name,
        }
    }

    /// Returns the textual rendering of the offending wire token.
    #[inline]
    pub fn token(&self) -> &str {
        match self {
            Self::UnrepresentableValue { token, .. } => token,
            Self::UnsupportedToken { token, .. } => token,
        }
    }
}
