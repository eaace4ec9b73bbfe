pub mod analysis;
pub mod catalog;
pub mod chat;
pub mod garden;
pub mod sessions;
