use crate::value::Codec;
use pressmill_error::codec::CodecError;
use serde_json::Value;

/// Adapts a codec for a required value into one that also accepts absence.
///
/// Purely structural: null maps to `None` and everything else is delegated
/// unchanged, so the inner codec is only ever invoked with a present value.
#[derive(Debug, Clone, Copy)]
pub struct OptionalCodec<C> {
    inner: C,
}

impl<C: Codec> OptionalCodec<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns the wrapped codec.
    #[inline]
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Codec> Codec for OptionalCodec<C> {
    type Value = Option<C::Value>;

    fn decode(&self, wire: &Value) -> Result<Self::Value, CodecError> {
        match wire {
            Value::Null => Ok(None),
            present => self.inner.decode(present).map(Some),
        }
    }

    fn encode(&self, value: &Self::Value) -> Value {
        match value {
            None => Value::Null,
            Some(present) => self.inner.encode(present),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Policy;
    use crate::value::EnumCodec;
    use crate::wire::WireEnum;
    use crate::wire_enum;
    use serde_json::json;

    wire_enum! {
        pub enum FileStatus {
            Uploading = 0,
            Ready = 1,
            Quarantined = 2,
        }
    }

    fn codec() -> OptionalCodec<EnumCodec<FileStatus>> {
        OptionalCodec::new(EnumCodec::new(Policy::Named))
    }

    #[test]
    fn null_maps_to_absent_in_both_directions() {
        let codec = codec();
        assert_eq!(codec.decode(&Value::Null), Ok(None));
        assert_eq!(codec.encode(&None), Value::Null);
    }

    #[test]
    fn present_values_delegate_to_the_inner_codec() {
        let codec = codec();
        for constant in FileStatus::all() {
            let wire = codec.encode(&Some(constant));
            assert_eq!(codec.decode(&wire), Ok(Some(constant)));
        }
        assert_eq!(codec.encode(&Some(FileStatus::Ready)), json!("ready"));
    }

    #[test]
    fn decode_failures_pass_through_unchanged() {
        let codec = codec();
        assert_eq!(
            codec.decode(&json!("bogus")),
            Err(CodecError::UnrepresentableValue {
                token: "bogus".into(),
                type_name: "FileStatus",
            })
        );
    }

    #[test]
    fn double_adaptation_stays_well_formed() {
        let codec = OptionalCodec::new(codec());
        assert_eq!(codec.decode(&Value::Null), Ok(None));
        assert_eq!(
            codec.decode(&json!("quarantined")),
            Ok(Some(Some(FileStatus::Quarantined)))
        );
        assert_eq!(codec.encode(&Some(Some(FileStatus::Ready))), json!("ready"));
    }
}
