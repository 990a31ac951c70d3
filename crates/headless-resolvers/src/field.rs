use headless_runtime::Record;
use headless_schema::{naming, Afterware, FieldDefinition, Resolution, ResolverBinding};
use inflector::Inflector;
use serde_json::{json, Value};

use crate::{
    image, meta, page, product, projection, sorting, FieldRequest, ResolverContext, ResolverError, ResolverResult,
};

const SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

/// Runs the resolver a field is bound to.
pub async fn resolve(ctx: &ResolverContext, binding: ResolverBinding, request: &FieldRequest) -> ResolverResult<String> {
    let projections = &ctx.config.projections;

    match binding {
        ResolverBinding::ImageBySize => image::resolve_image_by_size(ctx, request).await,
        ResolverBinding::BaseUrl => Ok(page::resolve_base_url(ctx)),
        ResolverBinding::MetaObject => meta::resolve_meta_object(ctx, request).await,
        ResolverBinding::BasePageData => Ok(page::resolve_base_page_data()),
        ResolverBinding::NavigationData => Ok(page::resolve_navigation_data()),
        ResolverBinding::SortingData => sorting::resolve_sorting_data(ctx, request).await,
        ResolverBinding::StockistsManyMany => projection::resolve_projection(ctx, request, &projections.stockists).await,
        ResolverBinding::NextProduct => product::resolve_next_product(ctx, request).await,
        ResolverBinding::BrandsManyMany => projection::resolve_projection(ctx, request, &projections.brands).await,
        ResolverBinding::RecipesManyMany => projection::resolve_projection(ctx, request, &projections.recipes).await,
    }
}

/// Resolves any field of the extended schema the way the host would.
///
/// Bound fields go through their resolver. Mapped fields read the property, or follow the
/// relation of that name, related records coming back as `{"__typename", "id"}` references.
pub async fn resolve_field(ctx: &ResolverContext, request: &FieldRequest) -> ResolverResult<Value> {
    let descriptor = ctx
        .schema
        .type_for_class(&request.class)
        .ok_or_else(|| ResolverError::UnknownClass(request.class.clone()))?;

    let field = descriptor
        .field(&request.field)
        .ok_or_else(|| ResolverError::UnknownField {
            type_name: descriptor.name().to_string(),
            field: request.field.clone(),
        })?;

    match &field.resolution {
        Resolution::Resolver { binding } => Ok(Value::String(resolve(ctx, *binding, request).await?)),
        Resolution::Property { path } => resolve_property(ctx, request, field, path).await,
        Resolution::Default => resolve_property(ctx, request, field, &field.name).await,
    }
}

async fn resolve_property(
    ctx: &ResolverContext,
    request: &FieldRequest,
    field: &FieldDefinition,
    path: &str,
) -> ResolverResult<Value> {
    let store = &ctx.runtime.store;

    let Some(record) = store.get_by_id_and_class(request.id, &request.class).await? else {
        return Ok(Value::Null);
    };

    // GraphQL field names are the camel cased property names
    let property = path.to_pascal_case();

    if let Some(value) = record.property(path).or_else(|| record.property(&property)) {
        return Ok(value.clone());
    }

    if SCALARS.contains(&field.ty.named_type()) {
        return Ok(Value::Null);
    }

    if field.ty.is_list() {
        let included = ctx.schema.included();

        let references = store
            .related(&record, &property)
            .await?
            .iter()
            .filter(|related| included.includes(related, &ctx.runtime.inclusion_hooks))
            .map(reference)
            .collect();

        return Ok(Value::Array(references));
    }

    let mut related = store.related_one(&record, &property).await?;

    if let Some(Afterware::EnsurePage) = field.afterware {
        related = Some(page::ensure_page(related, &ctx.config.naming));
    }

    Ok(related.as_ref().map_or(Value::Null, reference))
}

fn reference(record: &Record) -> Value {
    json!({
        "__typename": naming::type_name_for_class(&record.class),
        "id": record.id,
    })
}
