#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionsConfig {
    /// Backs `stockistsExtra` on products
    pub stockists: Projection,
    /// Backs `brandsExtra` on featured brand blocks
    pub brands: Projection,
    /// Backs `recipesExtra` on recipe card blocks
    pub recipes: Projection,
}

impl Default for ProjectionsConfig {
    fn default() -> Self {
        Self {
            stockists: Projection::new("Stockists", &["Title", "Link"]),
            brands: Projection::new("Brands", &["Title", "Link"]),
            recipes: Projection::new("Recipes", &["Title", "Link"]),
        }
    }
}

/// A related collection flattened into `{ id, <properties> }` objects.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Projection {
    pub relation: String,
    #[serde(default)]
    pub properties: Vec<String>,
}

impl Projection {
    pub fn new(relation: &str, properties: &[&str]) -> Self {
        Self {
            relation: relation.to_string(),
            properties: properties.iter().map(ToString::to_string).collect(),
        }
    }
}
