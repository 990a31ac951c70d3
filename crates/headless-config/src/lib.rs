#![cfg_attr(test, allow(unused_crate_dependencies))]

pub mod projections;
pub mod sorting;

use std::{fs, path::Path, str::FromStr};

pub use projections::*;
pub use sorting::*;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading configuration file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Configuration for the schema extensions and their field resolvers.
pub struct Config {
    /// Which model classes get exposed in the schema
    pub model_loader: ModelLoaderConfig,
    /// Class and type naming conventions of the host
    pub naming: NamingConfig,
    /// Asset URL handling
    pub assets: AssetsConfig,
    /// Environment lookups
    pub environment: EnvironmentConfig,
    /// Manually ordered collections
    pub sorting: SortingConfig,
    /// Many-to-many projections exposed as `*Extra` fields
    pub projections: ProjectionsConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        contents.parse()
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelLoaderConfig {
    /// Glob patterns of classes to expose. Empty means every class.
    pub included_dataobjects: Vec<String>,
    /// Glob patterns of classes to hide. Always wins over the included list.
    pub excluded_dataobjects: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    /// The page class whose interface hierarchical fields point to
    pub page_class: String,
    /// The root class of the page hierarchy. A parent of exactly this class is the "no parent" root.
    pub base_node_class: String,
    /// Suffix appended to a type name to form its interface name
    pub interface_suffix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            page_class: "Page".to_string(),
            base_node_class: r"SilverStripe\CMS\Model\SiteTree".to_string(),
            interface_suffix: "Interface".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// Path segment marking the root of the asset store in absolute URLs
    pub root_marker: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root_marker: "/assets/".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvironmentConfig {
    /// Variable holding the public frontend base URL
    pub base_url_variable: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            base_url_variable: "NEXTJS_BASE_URL".to_string(),
        }
    }
}
