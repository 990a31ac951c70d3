#![allow(unused_crate_dependencies)]

use headless_config::Config;
use headless_runtime::{Capabilities, ClassInfo};
use headless_runtime_local::StaticClassRegistry;
use headless_schema::{BuildError, Operation, Resolution, ResolverBinding, SchemaExtender};

const IMAGE: &str = r"SilverStripe\Assets\Image";

fn page() -> ClassInfo {
    ClassInfo::new("Page", Capabilities::HIERARCHICAL_NODE)
        .with_field("title", "String")
        .with_accessor("link")
}

fn image() -> ClassInfo {
    ClassInfo::new(IMAGE, Capabilities::FILE | Capabilities::IMAGE)
        .with_field("title", "String")
        .with_accessor("link")
}

fn config(toml: &str) -> Config {
    toml.parse().unwrap()
}

#[test]
fn pages_and_images() {
    let registry = StaticClassRegistry::new(vec![image(), page()]);
    let schema = SchemaExtender::new(&Config::default()).build(&registry).unwrap();

    insta::assert_snapshot!(schema.export_sdl(), @r###"
    directive @property(path: String!) on FIELD_DEFINITION
    directive @resolver(name: String!) on FIELD_DEFINITION
    directive @paginateList(enabled: Boolean!) on FIELD_DEFINITION
    directive @afterware(name: String!) on FIELD_DEFINITION

    interface PageInterface {
    	title: String
    	breadcrumbs: [PageInterface!]!
    	children: [PageInterface!]!
    	navChildren: [PageInterface!]!
    	navParent: PageInterface
    	metaObject: String
    	basePageData: String
    	navigationData: String
    	baseUrl: String
    	link: String!
    }

    type Page implements PageInterface {
    	title: String
    	breadcrumbs: [PageInterface!]! @property(path: "NavigationPath") @paginateList(enabled: false)
    	children: [PageInterface!]!
    	navChildren: [PageInterface!]! @property(path: "Children")
    	navParent: PageInterface @property(path: "Parent") @afterware(name: "ensurePage")
    	metaObject: String @resolver(name: "resolveMetaObject")
    	basePageData: String @resolver(name: "resolveBasePageData")
    	navigationData: String @resolver(name: "resolveNavigationData")
    	baseUrl: String @resolver(name: "resolveBaseUrl")
    	link: String!
    }

    type Image {
    	title: String
    	absoluteLink: String
    	width: Int
    	height: Int
    	relativeLink: String @property(path: "Link")
    	xlImage: String @resolver(name: "resolveImageBySize")
    	lgImage: String @resolver(name: "resolveImageBySize")
    	mdImage: String @resolver(name: "resolveImageBySize")
    	smImage: String @resolver(name: "resolveImageBySize")
    	xsImage: String @resolver(name: "resolveImageBySize")
    	link: String!
    }

    type Query {
    	readPages: [Page!]!
    	readOnePage(id: ID!): Page
    	readImages: [Image!]!
    	readOneImage(id: ID!): Image
    }
    "###);
}

#[test]
fn building_twice_is_identical() {
    let registry = StaticClassRegistry::new(vec![
        page(),
        image(),
        ClassInfo::new(r"App\PageTypes\ProductPage", Capabilities::HIERARCHICAL_NODE | Capabilities::PRODUCT),
    ]);
    let extender = SchemaExtender::new(&Config::default());

    let first = extender.build(&registry).unwrap();
    let second = extender.build(&registry).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.export_sdl(), second.export_sdl());
}

#[test]
fn declared_link_field_is_kept() {
    let stockist = ClassInfo::new(r"App\Models\Stockist", Capabilities::empty())
        .with_field("title", "String")
        .with_field("link", "String");
    let registry = StaticClassRegistry::new(vec![stockist]);

    let schema = SchemaExtender::new(&Config::default()).build(&registry).unwrap();
    let ty = schema.type_named("Stockist").unwrap();

    assert_eq!("String", ty.field("link").unwrap().ty.as_str());
    assert_eq!(2, ty.fields().len());
}

#[test]
fn no_link_without_accessor() {
    let registry = StaticClassRegistry::new(vec![ClassInfo::new(r"App\Models\Tag", Capabilities::empty())]);

    let schema = SchemaExtender::new(&Config::default()).build(&registry).unwrap();

    assert!(!schema.type_named("Tag").unwrap().has_field("link"));
}

#[test]
fn database_field_colliding_with_extension_is_rejected() {
    let product = ClassInfo::new(r"App\PageTypes\ProductPage", Capabilities::HIERARCHICAL_NODE | Capabilities::PRODUCT)
        .with_field("nextProduct", "String");
    let registry = StaticClassRegistry::new(vec![product]);

    let error = SchemaExtender::new(&Config::default()).build(&registry).unwrap_err();

    assert_eq!(
        BuildError::FieldCollision {
            type_name: "ProductPage".to_string(),
            field: "nextProduct".to_string(),
        },
        error
    );
}

#[test]
fn two_classes_with_one_type_name() {
    let registry = StaticClassRegistry::new(vec![
        ClassInfo::new(r"App\Models\Brand", Capabilities::empty()),
        ClassInfo::new(r"Vendor\Catalogue\Brand", Capabilities::empty()),
    ]);

    let error = SchemaExtender::new(&Config::default()).build(&registry).unwrap_err();

    insta::assert_snapshot!(error, @r###"classes 'App\Models\Brand' and 'Vendor\Catalogue\Brand' both map to the type name 'Brand'"###);
}

#[test]
fn excluded_classes_are_left_out() {
    let config = config(
        r#"
        [model_loader]
        included_dataobjects = ["App\\*", "Page"]
        excluded_dataobjects = ["App\\Internal\\*"]
        "#,
    );
    let registry = StaticClassRegistry::new(vec![
        page(),
        image(),
        ClassInfo::new(r"App\Models\Recipe", Capabilities::empty()),
        ClassInfo::new(r"App\Internal\AuditLog", Capabilities::empty()),
    ]);

    let schema = SchemaExtender::new(&config).build(&registry).unwrap();
    let names: Vec<_> = schema.types().map(|ty| ty.source_class()).collect();

    assert_eq!(vec![r"App\Models\Recipe", "Page"], names);
}

#[test]
fn custom_page_class_names_the_interface() {
    let config = config(
        r#"
        [naming]
        page_class = "App\\Pages\\ContentPage"
        interface_suffix = "Node"
        "#,
    );
    let registry = StaticClassRegistry::new(vec![page()]);

    let schema = SchemaExtender::new(&config).build(&registry).unwrap();
    let page = schema.type_for_class("Page").unwrap();

    assert_eq!("ContentPageNode", schema.interface_name());
    assert_eq!("[ContentPageNode!]!", page.field("children").unwrap().ty.as_str());
    assert_eq!("ContentPageNode", page.field("navParent").unwrap().ty.as_str());
}

#[test]
fn interface_holds_fields_shared_by_every_node() {
    let product = ClassInfo::new(r"App\PageTypes\ProductPage", Capabilities::HIERARCHICAL_NODE | Capabilities::PRODUCT);
    let registry = StaticClassRegistry::new(vec![page(), product, image()]);

    let sdl = SchemaExtender::new(&Config::default()).build(&registry).unwrap().export_sdl();

    let start = sdl.find("interface PageInterface {").unwrap();
    let end = start + sdl[start..].find('}').unwrap();

    insta::assert_snapshot!(&sdl[start..=end], @r###"
    interface PageInterface {
    	breadcrumbs: [PageInterface!]!
    	children: [PageInterface!]!
    	navChildren: [PageInterface!]!
    	navParent: PageInterface
    	metaObject: String
    	basePageData: String
    	navigationData: String
    	baseUrl: String
    }
    "###);

    assert!(sdl.contains("type ProductPage implements PageInterface {\n"));
    assert!(sdl.contains("type Page implements PageInterface {\n"));
    assert!(sdl.contains("type Image {\n"));
}

#[test]
fn no_interface_without_nodes() {
    let registry = StaticClassRegistry::new(vec![image()]);

    let sdl = SchemaExtender::new(&Config::default()).build(&registry).unwrap().export_sdl();

    assert!(sdl.starts_with("directive @property(path: String!) on FIELD_DEFINITION\n"));
    assert!(!sdl.contains("interface"));
}

#[test]
fn every_type_is_readable() {
    let registry = StaticClassRegistry::new(vec![page()]);
    let schema = SchemaExtender::new(&Config::default()).build(&registry).unwrap();

    assert_eq!(
        &[Operation::Read, Operation::ReadOne],
        schema.type_named("Page").unwrap().operations()
    );
}

#[test]
fn showcases_get_projections() {
    let registry = StaticClassRegistry::new(vec![
        ClassInfo::new(r"App\Elements\BrandShowcase", Capabilities::BRAND_SHOWCASE),
        ClassInfo::new(r"App\Elements\RecipeShowcase", Capabilities::RECIPE_SHOWCASE),
        ClassInfo::new(r"App\Elements\ElementFeaturedArticles", Capabilities::SORTABLE_CONTAINER),
    ]);

    let schema = SchemaExtender::new(&Config::default()).build(&registry).unwrap();

    let binding = |ty: &str, field: &str| schema.type_named(ty).and_then(|ty| ty.field(field)).map(|field| field.resolution.clone());

    assert_eq!(
        Some(Resolution::Resolver { binding: ResolverBinding::BrandsManyMany }),
        binding("BrandShowcase", "brandsExtra")
    );
    assert_eq!(
        Some(Resolution::Resolver { binding: ResolverBinding::RecipesManyMany }),
        binding("RecipeShowcase", "recipesExtra")
    );
    assert_eq!(
        Some(Resolution::Resolver { binding: ResolverBinding::SortingData }),
        binding("ElementFeaturedArticles", "sortData")
    );
    assert_eq!(None, binding("BrandShowcase", "recipesExtra"));
}

#[test]
fn json_export() {
    let registry = StaticClassRegistry::new(vec![
        ClassInfo::new(r"App\Models\Recipe", Capabilities::RECIPE_SHOWCASE).with_field("title", "String"),
    ]);
    let schema = SchemaExtender::new(&Config::default()).build(&registry).unwrap();

    insta::assert_json_snapshot!(schema, @r###"
    {
      "interfaceName": "PageInterface",
      "types": {
        "Recipe": {
          "sourceClass": "App\\Models\\Recipe",
          "name": "Recipe",
          "capabilities": [
            "recipe_showcase"
          ],
          "operations": [
            "read",
            "readOne"
          ],
          "fields": {
            "title": {
              "name": "title",
              "type": "String",
              "resolution": {
                "kind": "default"
              },
              "plugins": {}
            },
            "recipesExtra": {
              "name": "recipesExtra",
              "type": "String",
              "resolution": {
                "kind": "resolver",
                "binding": "recipesManyMany"
              },
              "plugins": {}
            }
          }
        }
      }
    }
    "###);
}
