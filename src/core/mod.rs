pub mod error;
pub mod tree;

pub use error::{Result, SyncError};
pub use tree::KeyTree;
