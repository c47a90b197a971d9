pub mod bookmark;
pub mod lock;
