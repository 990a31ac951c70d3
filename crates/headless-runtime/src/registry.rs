//! Static type metadata of the host's model classes.

use serde::Deserialize;

bitflags::bitflags! {
    /// What a model class is, as far as the schema extensions care.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Capabilities: u16 {
        const HIERARCHICAL_NODE = 1;
        const FILE = 1 << 1;
        const IMAGE = 1 << 2;
        const SORTABLE_CONTAINER = 1 << 3;
        const PRODUCT = 1 << 4;
        const BRAND_SHOWCASE = 1 << 5;
        const RECIPE_SHOWCASE = 1 << 6;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    HierarchicalNode,
    File,
    Image,
    SortableContainer,
    Product,
    BrandShowcase,
    RecipeShowcase,
}

impl Capability {
    pub const ALL: [Capability; 7] = [
        Capability::HierarchicalNode,
        Capability::File,
        Capability::Image,
        Capability::SortableContainer,
        Capability::Product,
        Capability::BrandShowcase,
        Capability::RecipeShowcase,
    ];
}

impl From<Capability> for Capabilities {
    fn from(value: Capability) -> Self {
        match value {
            Capability::HierarchicalNode => Capabilities::HIERARCHICAL_NODE,
            Capability::File => Capabilities::FILE,
            Capability::Image => Capabilities::IMAGE,
            Capability::SortableContainer => Capabilities::SORTABLE_CONTAINER,
            Capability::Product => Capabilities::PRODUCT,
            Capability::BrandShowcase => Capabilities::BRAND_SHOWCASE,
            Capability::RecipeShowcase => Capabilities::RECIPE_SHOWCASE,
        }
    }
}

impl FromIterator<Capability> for Capabilities {
    fn from_iter<T: IntoIterator<Item = Capability>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Capabilities::empty(), |acc, capability| acc | capability.into())
    }
}

impl Capabilities {
    /// The individual capabilities in this set, in declaration order.
    pub fn to_vec(self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|capability| self.contains(Capabilities::from(*capability)))
            .collect()
    }
}

/// A field the host exposes for every instance of a class.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// Metadata for one model class. Capabilities are resolved once, when the class is registered.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_capabilities")]
    pub capabilities: Capabilities,
    /// Database fields, exposed as-is
    #[serde(default)]
    pub fields: Vec<FieldInfo>,
    /// Computed getters available on instances, e.g. `link`
    #[serde(default)]
    pub accessors: Vec<String>,
}

impl ClassInfo {
    pub fn new(name: impl Into<String>, capabilities: Capabilities) -> Self {
        Self {
            name: name.into(),
            capabilities,
            fields: Vec::new(),
            accessors: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(FieldInfo {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    #[must_use]
    pub fn with_accessor(mut self, name: impl Into<String>) -> Self {
        self.accessors.push(name.into());
        self
    }

    pub fn has(&self, capabilities: Capabilities) -> bool {
        self.capabilities.contains(capabilities)
    }

    /// Whether instances expose a value under this name, as a field or a computed getter.
    pub fn has_property(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name) || self.accessors.iter().any(|accessor| accessor == name)
    }
}

fn deserialize_capabilities<'de, D>(deserializer: D) -> Result<Capabilities, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Vec::<Capability>::deserialize(deserializer)?.into_iter().collect())
}

/// Enumerates the host's model classes.
pub trait ClassRegistry {
    fn classes(&self) -> &[ClassInfo];

    fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes().iter().find(|class| class.name == name)
    }
}
