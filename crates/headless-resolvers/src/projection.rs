use headless_config::Projection;
use headless_runtime::Record;
use inflector::Inflector;
use serde_json::{Map, Value};

use crate::{FieldRequest, ResolverContext, ResolverResult};

/// `stockistsExtra`, `brandsExtra`, `recipesExtra`: the related items of a many-many relation
/// as a JSON array of `{"id": .., <property>: ..}` objects.
///
/// Property keys start lowercase, `Title` becomes `title`. `"[]"` when the parent does not exist.
pub async fn resolve_projection(
    ctx: &ResolverContext,
    request: &FieldRequest,
    projection: &Projection,
) -> ResolverResult<String> {
    let Some(parent) = ctx.runtime.store.get_by_id_and_class(request.id, &request.class).await? else {
        tracing::debug!(id = %request.id, class = %request.class, field = %request.field, "no parent");
        return Ok("[]".to_string());
    };

    let items = ctx.runtime.store.related(&parent, &projection.relation).await?;

    let projected: Vec<Value> = items.iter().map(|item| project(item, &projection.properties)).collect();

    Ok(serde_json::to_string(&projected)?)
}

pub(crate) fn project(record: &Record, properties: &[String]) -> Value {
    let mut object = Map::new();
    object.insert("id".to_string(), Value::from(record.id.get()));

    for property in properties {
        let value = record.property(property).cloned().unwrap_or(Value::Null);
        object.insert(property.to_camel_case(), value);
    }

    Value::Object(object)
}
