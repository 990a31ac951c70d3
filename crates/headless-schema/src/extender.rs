use headless_config::Config;
use headless_runtime::ClassRegistry;
use indexmap::{map::Entry, IndexMap};
use serde::Serialize;

use crate::{
    catalogue, naming, BuildError, FieldDefinition, IncludedClasses, InclusionFilter, Operation, OutputType, TypeDescriptor,
};

/// Name of the computed getter every type falls back to exposing.
const LINK_FIELD: &str = "link";

/// Builds the extended schema from the host's class registry.
#[derive(Debug)]
pub struct SchemaExtender {
    filter: InclusionFilter,
    interface_name: String,
}

impl SchemaExtender {
    pub fn new(config: &Config) -> Self {
        let page_type = naming::type_name_for_class(&config.naming.page_class);

        Self {
            filter: InclusionFilter::from(&config.model_loader),
            interface_name: naming::interface_name(page_type, &config.naming.interface_suffix),
        }
    }

    pub fn filter(&self) -> &InclusionFilter {
        &self.filter
    }

    /// The interface hierarchical fields point to, e.g. `PageInterface`.
    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    /// Walks the included classes in name order and attaches their fields.
    ///
    /// Never touches records. Building twice from the same registry gives the same schema.
    pub fn build(&self, registry: &dyn ClassRegistry) -> Result<ExtendedSchema, BuildError> {
        let mut types: IndexMap<String, TypeDescriptor> = IndexMap::new();

        for class_name in self.filter.included_classes(registry).iter() {
            let Some(class) = registry.class(class_name) else {
                continue;
            };

            let type_name = naming::type_name_for_class(&class.name);
            let mut descriptor = TypeDescriptor::new(&class.name, type_name, class.capabilities);

            descriptor.add_all_fields(class)?;
            descriptor.add_operation(Operation::Read);
            descriptor.add_operation(Operation::ReadOne);

            for field in catalogue::fields_for(class.capabilities, &self.interface_name) {
                descriptor.add_field(field)?;
            }

            if class.has_property(LINK_FIELD) && !descriptor.has_field(LINK_FIELD) {
                descriptor.add_field(FieldDefinition::new(
                    LINK_FIELD,
                    format!("{}!", OutputType::STRING),
                ))?;
            }

            match types.entry(type_name.to_string()) {
                Entry::Occupied(existing) => {
                    return Err(BuildError::DuplicateTypeName {
                        type_name: type_name.to_string(),
                        first: existing.get().source_class().to_string(),
                        second: class.name.clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(descriptor);
                }
            }
        }

        let field_count: usize = types.values().map(|descriptor| descriptor.fields().len()).sum();
        tracing::info!(types = types.len(), fields = field_count, "extended schema built");

        Ok(ExtendedSchema {
            interface_name: self.interface_name.clone(),
            types,
            included: self.filter.included_classes(registry).clone(),
        })
    }
}

/// The schema handed to the host's compiler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedSchema {
    interface_name: String,
    types: IndexMap<String, TypeDescriptor>,
    #[serde(skip)]
    included: IncludedClasses,
}

impl ExtendedSchema {
    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    /// Types in class name order.
    pub fn types(&self) -> impl ExactSizeIterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    pub fn type_named(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    pub fn type_for_class(&self, class: &str) -> Option<&TypeDescriptor> {
        self.types().find(|descriptor| descriptor.source_class() == class)
    }

    /// The classes the schema was built from.
    pub fn included(&self) -> &IncludedClasses {
        &self.included
    }
}
