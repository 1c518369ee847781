//! Key resolution against hierarchical catalogs
//!
//! # Architecture
//!
//! - `key_path.rs` - Dotted path / path list addressing and resolution tables
//! - `resolve.rs` - KeyResolver: descent with single-hop fallback
//! - `key_set.rs` - KeySetExtractor: filtered child-set extraction

mod key_path;
mod key_set;
mod resolve;

pub use key_path::{KeyPath, ResolutionTable};
pub use key_set::KeySetExtractor;
pub use resolve::KeyResolver;
