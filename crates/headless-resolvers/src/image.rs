use headless_runtime::{Image, IMAGE_CLASS};

use crate::{FieldRequest, ResolverContext, ResolverError, ResolverResult};

/// Bounding boxes of the responsive image fields.
const SIZES: [(&str, (u32, u32)); 5] = [
    ("xlImage", (1920, 1920)),
    ("lgImage", (1080, 1080)),
    ("mdImage", (800, 800)),
    ("smImage", (640, 640)),
    ("xsImage", (480, 480)),
];

/// The box an image field fits into. Other field names get the original asset.
pub fn bounding_box(field: &str) -> Option<(u32, u32)> {
    SIZES
        .iter()
        .find_map(|(name, size)| (*name == field).then_some(*size))
}

/// Cuts the scheme and host off an asset url, keeping it rooted at the asset marker.
///
/// `https://cms.example.com/assets/Uploads/a.jpg` becomes `/assets/Uploads/a.jpg`.
pub fn relative_asset_url(url: &str, marker: &str) -> ResolverResult<String> {
    let malformed = || ResolverError::MalformedAssetPath {
        url: url.to_string(),
        marker: marker.to_string(),
    };

    if marker.is_empty() || url.matches(marker).count() != 1 {
        return Err(malformed());
    }

    let (_, rest) = url.split_once(marker).ok_or_else(malformed)?;

    Ok(format!("{marker}{rest}"))
}

/// `xlImage` to `xsImage`: the relative url of the image fitted into the field's box, `""` without an image.
pub async fn resolve_image_by_size(ctx: &ResolverContext, request: &FieldRequest) -> ResolverResult<String> {
    let Some(record) = ctx.runtime.store.get_by_id_and_class(request.id, IMAGE_CLASS).await? else {
        tracing::debug!(id = %request.id, field = %request.field, "no image");
        return Ok(String::new());
    };

    let Some(image) = Image::from_record(&record) else {
        tracing::debug!(id = %request.id, "image has no url");
        return Ok(String::new());
    };

    let processed = match bounding_box(&request.field) {
        Some((width, height)) => ctx.runtime.images.fit_max(&image, width, height).await?,
        None => image,
    };

    relative_asset_url(&processed.absolute_url, &ctx.config.assets.root_marker)
}
