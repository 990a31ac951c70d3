use headless_runtime::Record;

use crate::{projection, FieldRequest, ResolverContext, ResolverResult};

const SORT: &str = "Sort";

/// `nextProduct`: the following product under the same parent as `{"id", "title", "link"}`.
///
/// Siblings of the same class are ordered by `Sort`. `"{}"` for the last product, a product
/// without parent, or one that does not exist.
pub async fn resolve_next_product(ctx: &ResolverContext, request: &FieldRequest) -> ResolverResult<String> {
    let Some(product) = ctx.runtime.store.get_by_id_and_class(request.id, &request.class).await? else {
        tracing::debug!(id = %request.id, class = %request.class, "no product");
        return Ok("{}".to_string());
    };

    match next_sibling(ctx, &product).await? {
        Some(next) => {
            let properties = ["Title".to_string(), "Link".to_string()];
            Ok(serde_json::to_string(&projection::project(&next, &properties))?)
        }
        None => Ok("{}".to_string()),
    }
}

async fn next_sibling(ctx: &ResolverContext, product: &Record) -> ResolverResult<Option<Record>> {
    let Some(parent) = ctx.runtime.store.related_one(product, "Parent").await? else {
        return Ok(None);
    };

    let mut siblings: Vec<Record> = ctx
        .runtime
        .store
        .related(&parent, "Children")
        .await?
        .into_iter()
        .filter(|sibling| sibling.class == product.class)
        .collect();

    siblings.sort_by_key(|sibling| sibling.integer(SORT).unwrap_or_default());

    let next = siblings
        .iter()
        .position(|sibling| sibling.id == product.id)
        .and_then(|index| siblings.get(index + 1))
        .cloned();

    Ok(next)
}

