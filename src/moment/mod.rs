pub mod timeline;
pub mod types;
