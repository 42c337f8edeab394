use crate::enums::user::AddressKind;
use serde::{Deserialize, Serialize};

/// Address on file for an account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i32,
    pub user_id: i32,
    #[serde(with = "pressmill_codec::wire_field")]
    pub kind: AddressKind,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}
