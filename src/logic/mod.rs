pub mod analyzer;
pub mod editor;
pub mod layout;
pub mod responder;
pub mod toolkit;
