/// Containers whose related items carry a manual order key.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortingConfig {
    pub containers: Vec<SortContainer>,
}

impl SortingConfig {
    /// The first container definition the given class (or one of its ancestors) matches.
    pub fn container_for<'a>(&self, mut classes: impl Iterator<Item = &'a str>) -> Option<&SortContainer> {
        classes.find_map(|class| self.containers.iter().find(|container| container.class == class))
    }
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            containers: vec![
                SortContainer {
                    class: r"Ogilvy\Models\Elemental\FeaturedArticles\ElementFeaturedArticles".to_string(),
                    relation: "Articles".to_string(),
                    order_key: default_order_key(),
                },
                SortContainer {
                    class: r"Ogilvy\Models\Elemental\TeamMember\ElementTeamMemberProfile".to_string(),
                    relation: "TeamMembers".to_string(),
                    order_key: default_order_key(),
                },
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortContainer {
    /// Container class
    pub class: String,
    /// Many-to-many relation holding the ordered items
    pub relation: String,
    /// Join property holding the order key
    #[serde(default = "default_order_key")]
    pub order_key: String,
}

fn default_order_key() -> String {
    "SortOrder".to_string()
}
