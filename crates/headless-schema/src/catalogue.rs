//! The fields each capability adds to a type.

use headless_runtime::Capabilities;

use crate::{Afterware, FieldDefinition, OutputType, ResolverBinding};

/// Image fields resolving to fixed-size variants, largest first.
pub const RESPONSIVE_IMAGE_FIELDS: [&str; 5] = ["xlImage", "lgImage", "mdImage", "smImage", "xsImage"];

/// Extension fields for a class with the given capabilities, in the order they get attached.
///
/// Each capability is checked on its own, a class matching several gets the fields of all of them.
pub(crate) fn fields_for(capabilities: Capabilities, interface_name: &str) -> Vec<FieldDefinition> {
    let mut fields = Vec::new();

    if capabilities.contains(Capabilities::HIERARCHICAL_NODE) {
        fields.extend(hierarchical_node_fields(interface_name));
    }

    if capabilities.contains(Capabilities::FILE) {
        fields.push(FieldDefinition::new("absoluteLink", OutputType::STRING));
    }

    if capabilities.contains(Capabilities::IMAGE) {
        fields.extend(image_fields());
    }

    if capabilities.contains(Capabilities::SORTABLE_CONTAINER) {
        fields.push(string_resolver("sortData", ResolverBinding::SortingData));
    }

    if capabilities.contains(Capabilities::PRODUCT) {
        fields.push(string_resolver("stockistsExtra", ResolverBinding::StockistsManyMany));
        fields.push(string_resolver("nextProduct", ResolverBinding::NextProduct));
    }

    if capabilities.contains(Capabilities::BRAND_SHOWCASE) {
        fields.push(string_resolver("brandsExtra", ResolverBinding::BrandsManyMany));
    }

    if capabilities.contains(Capabilities::RECIPE_SHOWCASE) {
        fields.push(string_resolver("recipesExtra", ResolverBinding::RecipesManyMany));
    }

    fields
}

fn hierarchical_node_fields(interface_name: &str) -> Vec<FieldDefinition> {
    let list = format!("[{interface_name}!]!");

    vec![
        FieldDefinition::new("breadcrumbs", list.as_str())
            .property("NavigationPath")
            .paginate_list(false),
        FieldDefinition::new("children", list.as_str()),
        // Kept apart from `children` so projects can customise that one freely.
        FieldDefinition::new("navChildren", list.as_str()).property("Children"),
        FieldDefinition::new("navParent", interface_name)
            .property("Parent")
            .afterware(Afterware::EnsurePage),
        string_resolver("metaObject", ResolverBinding::MetaObject),
        string_resolver("basePageData", ResolverBinding::BasePageData),
        string_resolver("navigationData", ResolverBinding::NavigationData),
        string_resolver("baseUrl", ResolverBinding::BaseUrl),
    ]
}

fn image_fields() -> Vec<FieldDefinition> {
    let mut fields = vec![
        FieldDefinition::new("width", OutputType::INT),
        FieldDefinition::new("height", OutputType::INT),
        FieldDefinition::new("relativeLink", OutputType::STRING).property("Link"),
    ];

    fields.extend(
        RESPONSIVE_IMAGE_FIELDS
            .iter()
            .map(|name| string_resolver(name, ResolverBinding::ImageBySize)),
    );

    fields
}

fn string_resolver(name: &str, binding: ResolverBinding) -> FieldDefinition {
    FieldDefinition::new(name, OutputType::STRING).resolver(binding)
}
