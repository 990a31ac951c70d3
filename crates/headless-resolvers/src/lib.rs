//! Field resolvers for the extended schema.
//!
//! Resolvers never fail for a record that does not exist, they return the sentinel documented
//! on each of them instead. Errors are scoped to the field being resolved.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod context;
mod error;
mod field;
pub mod image;
pub mod meta;
pub mod page;
pub mod product;
pub mod projection;
pub mod sorting;

pub use context::{FieldRequest, ResolverContext, ResolverRuntime};
pub use error::{ResolverError, ResolverResult};
pub use field::{resolve, resolve_field};
pub use meta::MetaObject;
