use headless_runtime::{Record, RecordId};

use crate::{FieldRequest, ResolverContext, ResolverResult};

const EMPTY_LIST: &str = "[]";

/// Orders ids by their sort key. Equal keys keep their relative order.
pub fn sort_entries(mut entries: Vec<(i64, RecordId)>) -> Vec<RecordId> {
    entries.sort_by_key(|(key, _)| *key);
    entries.into_iter().map(|(_, id)| id).collect()
}

/// `sortData`: ids of the container's items in manual order, the relation picked by the container's class.
///
/// `"[]"` when the container does not exist or no relation is configured for its class.
pub async fn resolve_sorting_data(ctx: &ResolverContext, request: &FieldRequest) -> ResolverResult<String> {
    let Some(container) = ctx.runtime.store.get_by_id_and_class(request.id, &request.class).await? else {
        tracing::debug!(id = %request.id, class = %request.class, "no sort container");
        return Ok(EMPTY_LIST.to_string());
    };

    let Some(definition) = ctx.config.sorting.container_for(container.classes()) else {
        tracing::warn!(class = %container.class, "no sorted relation configured");
        return Ok(EMPTY_LIST.to_string());
    };

    sorted_relation(ctx, &container, &definition.relation, &definition.order_key).await
}

/// Ids of one relation of `container`, ordered by the join property `order_key`, as a JSON array.
///
/// Items without a usable key sort as `0`.
pub async fn sorted_relation(
    ctx: &ResolverContext,
    container: &Record,
    relation: &str,
    order_key: &str,
) -> ResolverResult<String> {
    let items = ctx.runtime.store.related(container, relation).await?;

    let entries = items
        .iter()
        .map(|item| {
            let key = item.integer(order_key).unwrap_or_else(|| {
                tracing::debug!(id = %item.id, relation, "item without sort key");
                0
            });

            (key, item.id)
        })
        .collect();

    Ok(serde_json::to_string(&sort_entries(entries))?)
}
