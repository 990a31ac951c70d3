#![cfg_attr(test, allow(unused_crate_dependencies))]

mod binding;
mod catalogue;
mod descriptor;
mod error;
mod export_sdl;
mod extender;
pub mod glob;
mod inclusion;
pub mod naming;

pub use binding::ResolverBinding;
pub use catalogue::RESPONSIVE_IMAGE_FIELDS;
pub use descriptor::{Afterware, FieldDefinition, FieldPlugins, Operation, OutputType, Resolution, TypeDescriptor};
pub use error::BuildError;
pub use extender::{ExtendedSchema, SchemaExtender};
pub use inclusion::{IncludedClasses, InclusionFilter, InclusionHook};
