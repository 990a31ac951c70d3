#![allow(dead_code)]

use std::sync::Arc;

use headless_config::Config;
use headless_resolvers::{ResolverContext, ResolverRuntime};
use headless_runtime::{Capabilities, ClassInfo, Record, SiteConfig, IMAGE_CLASS};
use headless_runtime_local::{LocalImageTransformer, MapEnv, MemoryStore, StaticClassRegistry};
use headless_schema::{InclusionHook, SchemaExtender};

pub const SITE_TREE: &str = r"SilverStripe\CMS\Model\SiteTree";
pub const PAGE: &str = "Page";
pub const PRODUCT_PAGE: &str = r"App\PageTypes\ProductPage";
pub const STOCKIST: &str = r"App\Models\Stockist";
pub const FEATURED_ARTICLES: &str = r"Ogilvy\Models\Elemental\FeaturedArticles\ElementFeaturedArticles";
pub const ARTICLE: &str = r"App\Models\Article";

pub fn classes() -> Vec<ClassInfo> {
    vec![
        ClassInfo::new(PAGE, Capabilities::HIERARCHICAL_NODE)
            .with_field("title", "String")
            .with_accessor("link"),
        ClassInfo::new(PRODUCT_PAGE, Capabilities::HIERARCHICAL_NODE | Capabilities::PRODUCT)
            .with_field("title", "String")
            .with_accessor("link"),
        ClassInfo::new(IMAGE_CLASS, Capabilities::FILE | Capabilities::IMAGE).with_field("title", "String"),
        ClassInfo::new(FEATURED_ARTICLES, Capabilities::SORTABLE_CONTAINER),
        ClassInfo::new(STOCKIST, Capabilities::empty()).with_field("title", "String"),
        ClassInfo::new(ARTICLE, Capabilities::empty()).with_field("title", "String"),
    ]
}

pub fn page(id: u64, title: &str) -> Record {
    Record::new(id, PAGE)
        .with_ancestry([SITE_TREE])
        .with_property("Title", title)
}

pub fn product(id: u64, title: &str, sort: i64) -> Record {
    Record::new(id, PRODUCT_PAGE)
        .with_ancestry([PAGE, SITE_TREE])
        .with_property("Title", title)
        .with_property("Link", format!("/products/{}", title.to_lowercase()))
        .with_property("Sort", sort)
}

pub fn image(id: u64, path: &str, mime_type: &str, (width, height): (u32, u32)) -> Record {
    Record::new(id, IMAGE_CLASS)
        .with_property("Title", path.rsplit('/').next().unwrap_or(path))
        .with_property("AbsoluteURL", format!("https://cms.example.com/assets/{path}"))
        .with_property("MimeType", mime_type)
        .with_property("Width", width)
        .with_property("Height", height)
}

pub fn site_config() -> SiteConfig {
    SiteConfig {
        title: "Example".to_string(),
        default_meta_description: Some("Default Site Description".to_string()),
        default_meta_image: None,
    }
}

pub struct Fixture {
    pub store: MemoryStore,
    pub env: MapEnv,
    pub config: Config,
    pub hooks: Vec<Arc<dyn InclusionHook>>,
}

impl Default for Fixture {
    fn default() -> Self {
        let mut store = MemoryStore::new();
        store.set_site_config(site_config());

        Self {
            store,
            env: MapEnv::new(),
            config: Config::default(),
            hooks: Vec::new(),
        }
    }
}

impl Fixture {
    pub fn context(self) -> ResolverContext {
        let registry = StaticClassRegistry::new(classes());
        let schema = SchemaExtender::new(&self.config).build(&registry).unwrap();

        let store = Arc::new(self.store);

        let mut runtime = ResolverRuntime::new(
            store.clone(),
            Arc::new(LocalImageTransformer::new()),
            store,
            Arc::new(self.env),
        );

        for hook in self.hooks {
            runtime = runtime.with_inclusion_hook(hook);
        }

        ResolverContext::new(Arc::new(schema), Arc::new(self.config), runtime)
    }
}
