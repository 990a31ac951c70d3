#![deny(clippy::future_not_send)]
#![cfg_attr(test, allow(unused_crate_dependencies))]

pub mod env;
pub mod image;
pub mod record;
pub mod registry;
pub mod site;

pub use env::EnvSource;
pub use image::{Image, ImageTransformer, IMAGE_CLASS};
pub use record::{Record, RecordId, RecordStore, StoreError, StoreResult};
pub use registry::{Capabilities, Capability, ClassInfo, ClassRegistry, FieldInfo};
pub use site::{SiteConfig, SiteConfigSource};
