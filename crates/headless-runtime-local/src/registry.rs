use headless_runtime::{ClassInfo, ClassRegistry};

/// A class registry built from a fixed class list.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(transparent)]
pub struct StaticClassRegistry {
    classes: Vec<ClassInfo>,
}

impl StaticClassRegistry {
    pub fn new(classes: Vec<ClassInfo>) -> Self {
        Self { classes }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl ClassRegistry for StaticClassRegistry {
    fn classes(&self) -> &[ClassInfo] {
        &self.classes
    }
}
