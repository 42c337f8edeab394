pub use super::address::Address;
pub use super::media::MediaFile;
pub use super::page::{NewPage, Page};
pub use super::product::{ProductVariant, UpdateVariant};
pub use super::user::{NewUser, UserAccount};
