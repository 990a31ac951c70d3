use crate::{RecordId, StoreResult};

/// Site-wide settings edited in the CMS.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub default_meta_description: Option<String>,
    pub default_meta_image: Option<RecordId>,
}

#[async_trait::async_trait]
pub trait SiteConfigSource: Send + Sync {
    async fn site_config(&self) -> StoreResult<SiteConfig>;
}
