//! skylane-middleware
//!
//! Connector wrappers and the builder that stacks them.

mod builder;
mod cache;

pub use crate::builder::ConnectorBuilder;
pub use crate::cache::{CacheMiddleware, CachingConnector};
