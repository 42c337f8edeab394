pub mod field;
pub mod optional;
pub mod policy;
pub mod value;
pub mod wire;

pub use field::{wire_field, wire_field_opt};
pub use optional::OptionalCodec;
pub use policy::Policy;
pub use pressmill_error::codec::CodecError;
pub use value::{Codec, EnumCodec};
pub use wire::WireEnum;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::any::TypeId;
use tracing::trace;

/// Per-type policy cache. Construction is cheap and idempotent; the map only
/// guarantees that racing callers converge on one entry.
static POLICY_CACHE: Lazy<DashMap<TypeId, Policy>> = Lazy::new(DashMap::new);

/// Returns the codec for a required field of enumerated type `T`.
///
/// The policy is resolved from the registry the first time `T` is seen and
/// cached for the process lifetime.
pub fn codec_for<T: WireEnum>() -> EnumCodec<T> {
    let policy = *POLICY_CACHE
        .entry(TypeId::of::<T>())
        .or_insert_with(|| {
            let policy = policy::resolve(T::TYPE_NAME);
            trace!(type_name = T::TYPE_NAME, ?policy, "resolved wire policy");
            policy
        });
    EnumCodec::new(policy)
}

/// Returns the codec for an optional field of enumerated type `T`.
pub fn optional_codec_for<T: WireEnum>() -> OptionalCodec<EnumCodec<T>> {
    OptionalCodec::new(codec_for::<T>())
}
