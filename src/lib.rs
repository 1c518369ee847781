// ============================================================================
// locale-sync Library
// ============================================================================

pub mod core;
pub mod merger;
pub mod resolver;
pub mod sync;
pub mod tables;

// Re-export main types for convenience
pub use crate::core::{KeyTree, Result, SyncError};
pub use crate::merger::EntityMerger;
pub use crate::resolver::{KeyPath, KeyResolver, KeySetExtractor, ResolutionTable};
pub use crate::sync::SyncConfig;
