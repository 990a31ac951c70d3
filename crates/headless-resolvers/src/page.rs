//! Page level fields that need no record.

use headless_config::NamingConfig;
use headless_runtime::Record;

use crate::ResolverContext;

/// `baseUrl`: the frontend base url from the environment, `""` when unset.
pub fn resolve_base_url(ctx: &ResolverContext) -> String {
    ctx.runtime
        .env
        .var(&ctx.config.environment.base_url_variable)
        .unwrap_or_default()
}

/// `basePageData` placeholder.
pub fn resolve_base_page_data() -> String {
    "{}".to_string()
}

/// `navigationData` placeholder.
pub fn resolve_navigation_data() -> String {
    "[]".to_string()
}

/// Presents a bare base node as a page.
///
/// An unset parent comes back from the host as an empty base node record with id `0`, so
/// `None` is turned into that record first.
pub fn ensure_page(parent: Option<Record>, naming: &NamingConfig) -> Record {
    let parent = parent.unwrap_or_else(|| Record::new(0, naming.base_node_class.as_str()));

    if parent.class != naming.base_node_class {
        return parent;
    }

    let mut ancestry = Vec::with_capacity(parent.ancestry.len() + 1);
    ancestry.push(parent.class);
    ancestry.extend(parent.ancestry);

    Record {
        class: naming.page_class.clone(),
        ancestry,
        ..parent
    }
}
