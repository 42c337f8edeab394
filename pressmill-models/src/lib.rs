pub mod domain;
pub mod enums;

#[cfg(test)]
mod tests {
    use crate::enums::audit::AuditAction;
    use crate::enums::content::PageStatus;
    use crate::enums::user::UserRole;
    use pressmill_codec::{codec_for, Codec, Policy, WireEnum};
    use serde_json::json;

    #[test]
    fn every_declared_type_resolves_to_the_expected_policy() {
        assert_eq!(codec_for::<UserRole>().policy(), Policy::Numeric);
        assert_eq!(codec_for::<PageStatus>().policy(), Policy::Named);
        assert_eq!(codec_for::<AuditAction>().policy(), Policy::DefaultNamed);
    }

    #[test]
    fn page_status_example_scenario() {
        let codec = codec_for::<PageStatus>();
        assert_eq!(codec.encode(&PageStatus::Published), json!("published"));
        assert_eq!(codec.decode(&json!("Published")), Ok(PageStatus::Published));
        assert_eq!(codec.decode(&json!(1)), Ok(PageStatus::Published));
        assert!(codec.decode(&json!("bogus")).is_err());
    }

    #[test]
    fn named_round_trips_hold_for_all_constants() {
        let codec = codec_for::<PageStatus>();
        for constant in PageStatus::all() {
            assert_eq!(codec.decode(&codec.encode(&constant)), Ok(constant));
        }
        let codec = codec_for::<AuditAction>();
        for constant in AuditAction::all() {
            assert_eq!(codec.decode(&codec.encode(&constant)), Ok(constant));
        }
    }
}
