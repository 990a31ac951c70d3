use headless_runtime::StoreError;

/// A failure confined to the value of one field.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("asset url '{url}' does not contain '{marker}' exactly once")]
    MalformedAssetPath { url: String, marker: String },
    #[error("type '{type_name}' has no field '{field}'")]
    UnknownField { type_name: String, field: String },
    #[error("class '{0}' is not exposed in the schema")]
    UnknownClass(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("encoding the field value: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type ResolverResult<T> = Result<T, ResolverError>;
