use std::fmt;

use headless_runtime::{Capabilities, ClassInfo};
use indexmap::IndexMap;
use serde::Serialize;

use crate::{BuildError, ResolverBinding};

/// A GraphQL output type reference, wrapping included, e.g. `[PageInterface!]!`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OutputType(String);

impl OutputType {
    pub const STRING: &'static str = "String";
    pub const INT: &'static str = "Int";

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The named type with list and non-null wrappers removed.
    pub fn named_type(&self) -> &str {
        self.0.trim_matches(|c: char| matches!(c, '[' | ']' | '!'))
    }

    pub fn is_list(&self) -> bool {
        self.0.starts_with('[')
    }

    pub fn is_non_null(&self) -> bool {
        self.0.ends_with('!')
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OutputType {
    fn from(value: &str) -> Self {
        OutputType(value.to_string())
    }
}

impl From<String> for OutputType {
    fn from(value: String) -> Self {
        OutputType(value)
    }
}

/// How the value of a field is produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Resolution {
    /// The host resolves the field by its own name.
    Default,
    /// The host reads another property or relation.
    Property { path: String },
    /// A bespoke field resolver.
    Resolver { binding: ResolverBinding },
}

/// Plugin hints for the schema compiler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPlugins {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paginate_list: Option<bool>,
}

/// Post-processing applied to a field's resolved value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Afterware {
    /// A bare base-node parent (no parent at all) is presented as a page.
    EnsurePage,
}

impl Afterware {
    pub fn name(self) -> &'static str {
        match self {
            Afterware::EnsurePage => "ensurePage",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: OutputType,
    pub resolution: Resolution,
    pub plugins: FieldPlugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afterware: Option<Afterware>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, ty: impl Into<OutputType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            resolution: Resolution::Default,
            plugins: FieldPlugins::default(),
            afterware: None,
        }
    }

    #[must_use]
    pub fn property(mut self, path: impl Into<String>) -> Self {
        self.resolution = Resolution::Property { path: path.into() };
        self
    }

    #[must_use]
    pub fn resolver(mut self, binding: ResolverBinding) -> Self {
        self.resolution = Resolution::Resolver { binding };
        self
    }

    #[must_use]
    pub fn paginate_list(mut self, paginate: bool) -> Self {
        self.plugins.paginate_list = Some(paginate);
        self
    }

    #[must_use]
    pub fn afterware(mut self, afterware: Afterware) -> Self {
        self.afterware = Some(afterware);
        self
    }

    pub fn binding(&self) -> Option<ResolverBinding> {
        match self.resolution {
            Resolution::Resolver { binding } => Some(binding),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Read,
    ReadOne,
}

/// Schema-build-time description of one exposed class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    source_class: String,
    name: String,
    #[serde(serialize_with = "serialize_capabilities")]
    capabilities: Capabilities,
    operations: Vec<Operation>,
    fields: IndexMap<String, FieldDefinition>,
}

impl TypeDescriptor {
    pub fn new(source_class: impl Into<String>, name: impl Into<String>, capabilities: Capabilities) -> Self {
        Self {
            source_class: source_class.into(),
            name: name.into(),
            capabilities,
            operations: Vec::new(),
            fields: IndexMap::new(),
        }
    }

    pub fn source_class(&self) -> &str {
        &self.source_class
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn fields(&self) -> impl ExactSizeIterator<Item = &FieldDefinition> {
        self.fields.values()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Adds a field. Redefining an existing field is an error, never an overwrite.
    pub fn add_field(&mut self, field: FieldDefinition) -> Result<(), BuildError> {
        if self.fields.contains_key(&field.name) {
            return Err(BuildError::FieldCollision {
                type_name: self.name.clone(),
                field: field.name,
            });
        }

        self.fields.insert(field.name.clone(), field);

        Ok(())
    }

    /// Exposes every database field of the class under its own name.
    pub fn add_all_fields(&mut self, class: &ClassInfo) -> Result<(), BuildError> {
        class
            .fields
            .iter()
            .try_for_each(|field| self.add_field(FieldDefinition::new(field.name.as_str(), field.ty.as_str())))
    }

    pub fn add_operation(&mut self, operation: Operation) {
        if !self.operations.contains(&operation) {
            self.operations.push(operation);
        }
    }
}

fn serialize_capabilities<S>(capabilities: &Capabilities, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    capabilities.to_vec().serialize(serializer)
}
