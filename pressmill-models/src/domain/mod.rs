pub mod address;
pub mod media;
pub mod page;
pub mod prelude;
pub mod product;
pub mod user;
