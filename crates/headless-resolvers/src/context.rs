use std::sync::Arc;

use headless_config::Config;
use headless_runtime::{EnvSource, ImageTransformer, RecordId, RecordStore, SiteConfigSource};
use headless_schema::{ExtendedSchema, InclusionHook};

/// The collaborators resolvers read from.
#[derive(Clone)]
pub struct ResolverRuntime {
    pub store: Arc<dyn RecordStore>,
    pub images: Arc<dyn ImageTransformer>,
    pub site: Arc<dyn SiteConfigSource>,
    pub env: Arc<dyn EnvSource>,
    /// Record-level vetoes applied to relation results
    pub inclusion_hooks: Vec<Arc<dyn InclusionHook>>,
}

impl ResolverRuntime {
    pub fn new(
        store: Arc<dyn RecordStore>,
        images: Arc<dyn ImageTransformer>,
        site: Arc<dyn SiteConfigSource>,
        env: Arc<dyn EnvSource>,
    ) -> Self {
        Self {
            store,
            images,
            site,
            env,
            inclusion_hooks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_inclusion_hook(mut self, hook: Arc<dyn InclusionHook>) -> Self {
        self.inclusion_hooks.push(hook);
        self
    }
}

/// Everything a resolver gets besides the field it resolves. Cheap to clone and share across requests.
#[derive(Clone)]
pub struct ResolverContext {
    pub(crate) schema: Arc<ExtendedSchema>,
    pub(crate) config: Arc<Config>,
    pub(crate) runtime: ResolverRuntime,
}

impl ResolverContext {
    pub fn new(schema: Arc<ExtendedSchema>, config: Arc<Config>, runtime: ResolverRuntime) -> Self {
        Self {
            schema,
            config,
            runtime,
        }
    }

    pub fn schema(&self) -> &ExtendedSchema {
        &self.schema
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// The field being resolved: which record, loaded as which class, under which field name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldRequest {
    pub id: RecordId,
    pub class: String,
    pub field: String,
}

impl FieldRequest {
    pub fn new(id: u64, class: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(id),
            class: class.into(),
            field: field.into(),
        }
    }
}
