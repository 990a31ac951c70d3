use std::fmt;

/// A field resolver the schema compiler routes a field to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResolverBinding {
    /// Fixed-size responsive variants of an image
    ImageBySize,
    /// Public frontend base URL from the environment
    BaseUrl,
    /// SEO meta object of a page
    MetaObject,
    BasePageData,
    NavigationData,
    /// Manually ordered collection of a sortable container
    SortingData,
    StockistsManyMany,
    NextProduct,
    BrandsManyMany,
    RecipesManyMany,
}

impl ResolverBinding {
    /// The name the host knows the resolver by.
    pub fn name(self) -> &'static str {
        match self {
            ResolverBinding::ImageBySize => "resolveImageBySize",
            ResolverBinding::BaseUrl => "resolveBaseUrl",
            ResolverBinding::MetaObject => "resolveMetaObject",
            ResolverBinding::BasePageData => "resolveBasePageData",
            ResolverBinding::NavigationData => "resolveNavigationData",
            ResolverBinding::SortingData => "resolveSortingData",
            ResolverBinding::StockistsManyMany => "resolveStockistManyMany",
            ResolverBinding::NextProduct => "resolveNextProduct",
            ResolverBinding::BrandsManyMany => "resolveBrandsManyMany",
            ResolverBinding::RecipesManyMany => "resolveRecipesManyMany",
        }
    }
}

impl fmt::Display for ResolverBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
