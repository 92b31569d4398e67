pub mod files;
pub mod key;
