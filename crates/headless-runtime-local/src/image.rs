use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use headless_runtime::{Image, ImageTransformer, StoreResult};

/// Computes variants the way the CMS names them on disk, without touching any file.
///
/// A variant of `/assets/Uploads/hero.jpg` resized with `FitMax(1920, 1920)` lives at
/// `/assets/Uploads/hero__FitMaxWzE5MjAsMTkyMF0.jpg`, the suffix being the base64 encoded
/// JSON argument list.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalImageTransformer;

impl LocalImageTransformer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl ImageTransformer for LocalImageTransformer {
    async fn fit_max(&self, image: &Image, width: u32, height: u32) -> StoreResult<Image> {
        if image.width == 0 || image.height == 0 || (image.width <= width && image.height <= height) {
            return Ok(image.clone());
        }

        let scale = f64::min(
            f64::from(width) / f64::from(image.width),
            f64::from(height) / f64::from(image.height),
        );

        let scaled = |dimension: u32, bound: u32| ((f64::from(dimension) * scale).round() as u32).clamp(1, bound);

        Ok(variant(
            image,
            "FitMax",
            (width, height),
            (scaled(image.width, width), scaled(image.height, height)),
        ))
    }

    async fn fill(&self, image: &Image, width: u32, height: u32) -> StoreResult<Image> {
        Ok(variant(image, "Fill", (width, height), (width, height)))
    }
}

fn variant(image: &Image, method: &str, arguments: (u32, u32), (width, height): (u32, u32)) -> Image {
    let encoded = URL_SAFE_NO_PAD.encode(format!("[{},{}]", arguments.0, arguments.1));
    let suffix = format!("__{method}{encoded}");

    Image {
        id: image.id,
        title: image.title.clone(),
        absolute_url: variant_url(&image.absolute_url, &suffix),
        mime_type: image.mime_type.clone(),
        width,
        height,
    }
}

fn variant_url(url: &str, suffix: &str) -> String {
    let file_start = url.rfind('/').map_or(0, |index| index + 1);

    match url[file_start..].rfind('.') {
        Some(dot) => {
            let (stem, extension) = url.split_at(file_start + dot);
            format!("{stem}{suffix}{extension}")
        }
        None => format!("{url}{suffix}"),
    }
}
