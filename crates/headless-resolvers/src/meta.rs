use headless_runtime::{Image, Record, IMAGE_CLASS};
use serde::Serialize;

use crate::{FieldRequest, ResolverContext, ResolverResult};

/// Open Graph card size, emitted even when there is no image.
pub const OG_IMAGE_SIZE: (u32, u32) = (1200, 628);
pub const TWITTER_IMAGE_SIZE: (u32, u32) = (1024, 512);

/// The SEO block a frontend renders into the document head.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaObject {
    pub meta_title: String,
    pub meta_description: String,
    #[serde(rename = "canonicalURL")]
    pub canonical_url: String,
    pub site_name: String,
    pub og_image: String,
    pub twitter_image: String,
    pub og_image_type: String,
    pub og_image_title: String,
    pub og_image_width: u32,
    pub og_image_height: u32,
}

/// `metaObject`: JSON encoded [`MetaObject`], `""` when the page does not exist.
pub async fn resolve_meta_object(ctx: &ResolverContext, request: &FieldRequest) -> ResolverResult<String> {
    let Some(node) = ctx.runtime.store.get_by_id_and_class(request.id, &request.class).await? else {
        tracing::debug!(id = %request.id, class = %request.class, "no page for meta object");
        return Ok(String::new());
    };

    let meta = meta_object(ctx, &node).await?;

    Ok(serde_json::to_string(&meta)?)
}

pub async fn meta_object(ctx: &ResolverContext, node: &Record) -> ResolverResult<MetaObject> {
    let site = ctx.runtime.site.site_config().await?;

    let mut meta = MetaObject {
        meta_title: override_or(node, "MetaTitle", node.string("Title")),
        meta_description: override_or(node, "MetaDescription", site.default_meta_description.as_deref()),
        canonical_url: override_or(node, "MetaCanonicalURL", node.string("AbsoluteLink")),
        site_name: site.title,
        og_image_width: OG_IMAGE_SIZE.0,
        og_image_height: OG_IMAGE_SIZE.1,
        ..Default::default()
    };

    let image = match own_meta_image(ctx, node).await? {
        Some(image) => Some(image),
        None => match site.default_meta_image {
            Some(id) => ctx
                .runtime
                .store
                .get_by_id_and_class(id, IMAGE_CLASS)
                .await?
                .as_ref()
                .and_then(Image::from_record),
            None => None,
        },
    };

    if let Some(image) = image {
        let (width, height) = OG_IMAGE_SIZE;
        meta.og_image = ctx.runtime.images.fill(&image, width, height).await?.absolute_url;

        let (width, height) = TWITTER_IMAGE_SIZE;
        meta.twitter_image = ctx.runtime.images.fill(&image, width, height).await?.absolute_url;

        meta.og_image_type = image.mime_type;
        meta.og_image_title = image.title;
    }

    Ok(meta)
}

/// An empty relation and a broken reference both count as "no image".
async fn own_meta_image(ctx: &ResolverContext, node: &Record) -> ResolverResult<Option<Image>> {
    let image = ctx.runtime.store.related_one(node, "MetaImage").await?;

    Ok(image.as_ref().and_then(Image::from_record))
}

fn override_or(node: &Record, name: &str, fallback: Option<&str>) -> String {
    node.string(name).or(fallback).unwrap_or_default().to_string()
}
