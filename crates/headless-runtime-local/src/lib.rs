#![cfg_attr(test, allow(unused_crate_dependencies))]

mod env;
mod image;
mod memory;
mod registry;

pub use env::{MapEnv, ProcessEnv};
pub use image::LocalImageTransformer;
pub use memory::{MemoryStore, RelationTarget};
pub use registry::StaticClassRegistry;
