use std::{fs, sync::Arc};

use anyhow::Context;
use headless_config::Config;
use headless_resolvers::{resolve_field, FieldRequest, ResolverContext, ResolverRuntime};
use headless_runtime_local::{LocalImageTransformer, MemoryStore, ProcessEnv, StaticClassRegistry};
use headless_schema::SchemaExtender;
use serde_json::Value;

use crate::args::{Command, ResolveArgs, SchemaFormat};

/// Runs a command, returning what goes to stdout.
pub(crate) async fn run(command: &Command, config: Config, registry: &StaticClassRegistry) -> anyhow::Result<String> {
    let schema = SchemaExtender::new(&config).build(registry)?;

    match command {
        Command::Schema { format } => match format {
            SchemaFormat::Sdl => Ok(schema.export_sdl()),
            SchemaFormat::Json => Ok(serde_json::to_string_pretty(&schema)?),
        },
        Command::Resolve(args) => {
            let context = ResolverContext::new(Arc::new(schema), Arc::new(config), local_runtime(args)?);
            let request = FieldRequest::new(args.id, args.class.as_str(), args.field.as_str());

            match resolve_field(&context, &request).await? {
                Value::String(value) => Ok(value),
                value => Ok(serde_json::to_string_pretty(&value)?),
            }
        }
    }
}

fn local_runtime(args: &ResolveArgs) -> anyhow::Result<ResolverRuntime> {
    let json = fs::read_to_string(&args.fixtures)
        .with_context(|| format!("reading fixtures '{}'", args.fixtures.display()))?;

    let store = Arc::new(MemoryStore::from_json(&json).context("parsing fixtures")?);

    Ok(ResolverRuntime::new(
        store.clone(),
        Arc::new(LocalImageTransformer::new()),
        store,
        Arc::new(ProcessEnv),
    ))
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use indoc::indoc;

    use super::*;

    const REGISTRY: &str = indoc! {r#"
        [
          { "name": "Page", "capabilities": ["hierarchical_node"], "fields": [{ "name": "title", "type": "String" }], "accessors": ["link"] },
          { "name": "SilverStripe\\Assets\\Image", "capabilities": ["file", "image"] }
        ]
    "#};

    const FIXTURES: &str = indoc! {r#"
        {
          "site_config": { "title": "Example", "default_meta_description": "Default Site Description" },
          "records": [
            { "id": 1, "class": "Page", "properties": { "Title": "Home", "AbsoluteLink": "https://www.example.com/" } },
            { "id": 2, "class": "Page", "properties": { "Title": "About" } },
            {
              "id": 10,
              "class": "SilverStripe\\Assets\\Image",
              "properties": { "AbsoluteURL": "https://cms.example.com/assets/hero.jpg", "Width": 3000, "Height": 3000 }
            }
          ],
          "relations": [{ "from": 1, "relation": "Children", "to": [{ "id": 2 }] }]
        }
    "#};

    fn resolve_command(fixtures: &Path, class: &str, id: u64, field: &str) -> Command {
        Command::Resolve(ResolveArgs {
            fixtures: fixtures.to_path_buf(),
            class: class.to_string(),
            id,
            field: field.to_string(),
        })
    }

    #[tokio::test]
    async fn schema_formats() {
        let registry = StaticClassRegistry::from_json(REGISTRY).unwrap();

        let sdl = run(&Command::Schema { format: SchemaFormat::Sdl }, Config::default(), &registry)
            .await
            .unwrap();
        assert!(sdl.contains("\tmetaObject: String @resolver(name: \"resolveMetaObject\")\n"));
        assert!(sdl.contains("\treadOneImage(id: ID!): Image\n"));

        let json = run(&Command::Schema { format: SchemaFormat::Json }, Config::default(), &registry)
            .await
            .unwrap();
        let json: Value = serde_json::from_str(&json).unwrap();
        assert_eq!("PageInterface", json["interfaceName"]);
        assert_eq!("image", json["types"]["Image"]["capabilities"][1]);
    }

    #[tokio::test]
    async fn resolve_from_fixtures() {
        let registry = StaticClassRegistry::from_json(REGISTRY).unwrap();
        let mut fixtures = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut fixtures, FIXTURES.as_bytes()).unwrap();

        let meta = run(&resolve_command(fixtures.path(), "Page", 1, "metaObject"), Config::default(), &registry)
            .await
            .unwrap();
        let meta: Value = serde_json::from_str(&meta).unwrap();
        assert_eq!("Default Site Description", meta["metaDescription"]);
        assert_eq!("https://www.example.com/", meta["canonicalURL"]);

        let image = run(
            &resolve_command(fixtures.path(), r"SilverStripe\Assets\Image", 10, "lgImage"),
            Config::default(),
            &registry,
        )
        .await
        .unwrap();
        assert_eq!("/assets/hero__FitMaxWzEwODAsMTA4MF0.jpg", image);

        let children = run(&resolve_command(fixtures.path(), "Page", 1, "children"), Config::default(), &registry)
            .await
            .unwrap();
        let children: Value = serde_json::from_str(&children).unwrap();
        assert_eq!(serde_json::json!([{ "__typename": "Page", "id": 2 }]), children);
    }

    #[tokio::test]
    async fn missing_fixtures_file() {
        let registry = StaticClassRegistry::from_json(REGISTRY).unwrap();

        let error = run(
            &resolve_command(Path::new("/nonexistent/fixtures.json"), "Page", 1, "title"),
            Config::default(),
            &registry,
        )
        .await
        .unwrap_err();

        assert_eq!("reading fixtures '/nonexistent/fixtures.json'", error.to_string());
    }
}
