use std::sync::{Arc, OnceLock};

use headless_config::ModelLoaderConfig;
use headless_runtime::{ClassRegistry, Record};

use crate::glob::Pattern;

/// Selects the model classes exposed in the schema.
///
/// A class is admitted when the allow list is empty or one of its patterns matches, and no
/// deny pattern matches. The class list is computed on first use and never changes afterwards.
#[derive(Debug)]
pub struct InclusionFilter {
    allow: Vec<Pattern>,
    deny: Vec<Pattern>,
    included: OnceLock<IncludedClasses>,
}

impl InclusionFilter {
    pub fn new<A, D>(allow: A, deny: D) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            allow: allow.into_iter().map(Pattern::new).collect(),
            deny: deny.into_iter().map(Pattern::new).collect(),
            included: OnceLock::new(),
        }
    }

    pub fn admits(&self, class: &str) -> bool {
        if self.deny.iter().any(|pattern| pattern.matches(class)) {
            return false;
        }

        self.allow.is_empty() || self.allow.iter().any(|pattern| pattern.matches(class))
    }

    /// The admitted classes of the registry, sorted by name.
    ///
    /// Only the first call consults the registry.
    pub fn included_classes(&self, registry: &dyn ClassRegistry) -> &IncludedClasses {
        self.included.get_or_init(|| {
            let mut classes: Vec<String> = registry
                .classes()
                .iter()
                .filter(|class| self.admits(&class.name))
                .map(|class| class.name.clone())
                .collect();

            classes.sort();
            classes.dedup();

            tracing::debug!(
                total = registry.classes().len(),
                included = classes.len(),
                "selected model classes"
            );

            IncludedClasses(classes)
        })
    }

    /// Whether a record may be handed out: no hook vetoes it and its class is included.
    pub fn includes(&self, record: &Record, registry: &dyn ClassRegistry, hooks: &[Arc<dyn InclusionHook>]) -> bool {
        self.included_classes(registry).includes(record, hooks)
    }
}

/// Lets a project hide individual records whose class is otherwise exposed.
pub trait InclusionHook: Send + Sync {
    /// Returning `false` hides the record.
    fn included(&self, record: &Record) -> bool;
}

impl From<&ModelLoaderConfig> for InclusionFilter {
    fn from(config: &ModelLoaderConfig) -> Self {
        InclusionFilter::new(&config.included_dataobjects, &config.excluded_dataobjects)
    }
}

/// Sorted list of class names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IncludedClasses(Vec<String>);

impl IncludedClasses {
    pub fn contains(&self, class: &str) -> bool {
        self.0.binary_search_by(|name| name.as_str().cmp(class)).is_ok()
    }

    pub fn includes(&self, record: &Record, hooks: &[Arc<dyn InclusionHook>]) -> bool {
        if !hooks.iter().all(|hook| hook.included(record)) {
            tracing::debug!(id = %record.id, class = %record.class, "record vetoed");
            return false;
        }

        self.contains(&record.class)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
