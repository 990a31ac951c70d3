use std::collections::BTreeMap;

use headless_runtime::{Record, RecordId, RecordStore, SiteConfig, SiteConfigSource, StoreResult};
use serde_json::Value;

/// A record store holding a fixed data set, e.g. loaded from a JSON fixture.
///
/// ```json
/// {
///   "site_config": { "title": "Site", "default_meta_image": 10 },
///   "records": [{ "id": 1, "class": "Page", "properties": { "Title": "Home" } }],
///   "relations": [{ "from": 1, "relation": "Children", "to": [{ "id": 2 }] }]
/// }
/// ```
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MemoryStore {
    site_config: SiteConfig,
    records: Vec<Record>,
    relations: Vec<RelationFixture>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RelationFixture {
    from: RecordId,
    #[serde(default)]
    from_class: Option<String>,
    relation: String,
    to: Vec<RelationTarget>,
}

/// One end of a relation. `join` holds many-many extra fields, merged into the related record.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationTarget {
    pub id: RecordId,
    #[serde(default)]
    pub class: Option<String>,
    #[serde(default)]
    pub join: BTreeMap<String, Value>,
}

impl RelationTarget {
    pub fn new(id: u64) -> Self {
        Self {
            id: RecordId::new(id),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_join(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.join.insert(name.into(), value.into());
        self
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn set_site_config(&mut self, site_config: SiteConfig) {
        self.site_config = site_config;
    }

    pub fn insert(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Sets the targets of a relation, replacing earlier ones.
    pub fn relate(&mut self, from: &Record, relation: &str, to: Vec<RelationTarget>) {
        self.relations
            .retain(|fixture| !(fixture.from == from.id && fixture.relation == relation));

        self.relations.push(RelationFixture {
            from: from.id,
            from_class: Some(from.class.clone()),
            relation: relation.to_string(),
            to,
        });
    }

    fn find(&self, id: RecordId, class: Option<&str>) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.id == id && class.is_none_or(|class| record.is_a(class)))
    }
}

#[async_trait::async_trait]
impl RecordStore for MemoryStore {
    async fn get_by_id_and_class(&self, id: RecordId, class: &str) -> StoreResult<Option<Record>> {
        Ok(self.find(id, Some(class)).cloned())
    }

    async fn related(&self, record: &Record, relation: &str) -> StoreResult<Vec<Record>> {
        let fixture = self.relations.iter().find(|fixture| {
            fixture.from == record.id
                && fixture.relation == relation
                && fixture.from_class.as_deref().is_none_or(|class| record.is_a(class))
        });

        let Some(fixture) = fixture else {
            return Ok(Vec::new());
        };

        let related = fixture
            .to
            .iter()
            .filter_map(|target| {
                let Some(found) = self.find(target.id, target.class.as_deref()) else {
                    tracing::debug!(
                        "dropping broken reference {}.{} -> {}",
                        record.id,
                        relation,
                        target.id
                    );
                    return None;
                };

                let mut found = found.clone();
                found
                    .properties
                    .extend(target.join.iter().map(|(name, value)| (name.clone(), value.clone())));

                Some(found)
            })
            .collect();

        Ok(related)
    }
}

#[async_trait::async_trait]
impl SiteConfigSource for MemoryStore {
    async fn site_config(&self) -> StoreResult<SiteConfig> {
        Ok(self.site_config.clone())
    }
}
