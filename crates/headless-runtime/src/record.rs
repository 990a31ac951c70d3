use std::{collections::BTreeMap, fmt};

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record store error: {0}")]
    Backend(String),
    #[error("image transform error: {0}")]
    Transform(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Identifier of a record in the host's store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A read-only snapshot of one record.
///
/// `ancestry` lists the parent classes of `class`, closest first. Lookups by class
/// match subclasses through it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub class: String,
    #[serde(default)]
    pub ancestry: Vec<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(id: u64, class: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(id),
            class: class.into(),
            ancestry: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_ancestry<I, S>(mut self, ancestry: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ancestry = ancestry.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// The record class followed by its ancestors.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.class.as_str()).chain(self.ancestry.iter().map(String::as_str))
    }

    pub fn is_a(&self, class: &str) -> bool {
        self.classes().any(|candidate| candidate == class)
    }

    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name).filter(|value| !value.is_null())
    }

    /// A string property, `None` when missing or empty.
    pub fn string(&self, name: &str) -> Option<&str> {
        self.property(name)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    }

    /// An integer property. Numeric strings are accepted, hosts often hand those out for join columns.
    pub fn integer(&self, name: &str) -> Option<i64> {
        match self.property(name)? {
            Value::Number(number) => number.as_i64(),
            Value::String(string) => string.trim().parse().ok(),
            _ => None,
        }
    }
}

/// The host's record store.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Loads the record with the given id if it is an instance of `class` or one of its subclasses.
    async fn get_by_id_and_class(&self, id: RecordId, class: &str) -> StoreResult<Option<Record>>;

    /// The records of a relation, in the relation's natural order.
    ///
    /// Has-one relations yield at most one record. Broken references are left out, so every
    /// returned record exists. Many-many join properties are merged into the related records.
    async fn related(&self, record: &Record, relation: &str) -> StoreResult<Vec<Record>>;

    async fn related_one(&self, record: &Record, relation: &str) -> StoreResult<Option<Record>> {
        Ok(self.related(record, relation).await?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn subclass_matching() {
        let record = Record::new(4, r"App\PageTypes\ProductPage")
            .with_ancestry(["Page", r"SilverStripe\CMS\Model\SiteTree"]);

        assert!(record.is_a(r"App\PageTypes\ProductPage"));
        assert!(record.is_a("Page"));
        assert!(record.is_a(r"SilverStripe\CMS\Model\SiteTree"));
        assert!(!record.is_a(r"SilverStripe\Assets\Image"));
    }

    #[test]
    fn empty_strings_are_missing() {
        let record = Record::new(1, "Page")
            .with_property("Title", "Home")
            .with_property("MetaTitle", "")
            .with_property("MetaDescription", Value::Null);

        assert_eq!(Some("Home"), record.string("Title"));
        assert_eq!(None, record.string("MetaTitle"));
        assert_eq!(None, record.string("MetaDescription"));
        assert_eq!(None, record.string("Unknown"));
    }

    #[test]
    fn integers_from_numbers_and_strings() {
        let record = Record::new(1, "Item")
            .with_property("SortOrder", 3)
            .with_property("Legacy", " 12 ")
            .with_property("Broken", "twelve")
            .with_property("Flag", true);

        assert_eq!(Some(3), record.integer("SortOrder"));
        assert_eq!(Some(12), record.integer("Legacy"));
        assert_eq!(None, record.integer("Broken"));
        assert_eq!(None, record.integer("Flag"));
    }

    #[test]
    fn deserialize_with_defaults() {
        let record: Record = serde_json::from_value(json!({ "id": 7, "class": "Page" })).unwrap();

        assert_eq!(RecordId::new(7), record.id);
        assert!(record.ancestry.is_empty());
        assert!(record.properties.is_empty());
    }
}
