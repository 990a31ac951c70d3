use crate::{Record, RecordId, StoreResult};

pub const IMAGE_CLASS: &str = r"SilverStripe\Assets\Image";

const TITLE: &str = "Title";
const ABSOLUTE_URL: &str = "AbsoluteURL";
const MIME_TYPE: &str = "MimeType";
const WIDTH: &str = "Width";
const HEIGHT: &str = "Height";

/// An image asset, either an original or a generated variant.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Image {
    pub id: RecordId,
    pub title: String,
    pub absolute_url: String,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
}

impl Image {
    /// Reads the image properties of a record. Records without a URL are not usable as images.
    pub fn from_record(record: &Record) -> Option<Self> {
        let absolute_url = record.string(ABSOLUTE_URL)?.to_string();

        let dimension = |name: &str| {
            record
                .integer(name)
                .and_then(|value| u32::try_from(value).ok())
                .unwrap_or_default()
        };

        Some(Self {
            id: record.id,
            title: record.string(TITLE).unwrap_or_default().to_string(),
            absolute_url,
            mime_type: record.string(MIME_TYPE).unwrap_or_default().to_string(),
            width: dimension(WIDTH),
            height: dimension(HEIGHT),
        })
    }
}

/// The host's image manipulation service.
#[async_trait::async_trait]
pub trait ImageTransformer: Send + Sync {
    /// Scales the image down to fit within the box, keeping its aspect ratio. Never upscales.
    async fn fit_max(&self, image: &Image, width: u32, height: u32) -> StoreResult<Image>;

    /// Scales and crops the image to exactly fill the box.
    async fn fill(&self, image: &Image, width: u32, height: u32) -> StoreResult<Image>;
}
