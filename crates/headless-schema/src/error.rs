/// Schema build failures. Any of these means the schema is inconsistent and must not be served.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("field '{field}' is already defined on type '{type_name}'")]
    FieldCollision { type_name: String, field: String },
    #[error("classes '{first}' and '{second}' both map to the type name '{type_name}'")]
    DuplicateTypeName {
        type_name: String,
        first: String,
        second: String,
    },
}
