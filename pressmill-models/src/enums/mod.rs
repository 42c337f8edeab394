pub mod audit;
pub mod commerce;
pub mod content;
pub mod media;
pub mod user;
