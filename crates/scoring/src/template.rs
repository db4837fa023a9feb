//! Input records handed to the scorers by the surrounding application.

use serde::{Deserialize, Deserializer, Serialize};

/// A user-submitted project template.
///
/// Every field defaults when missing or `null`, so partially populated rows
/// from storage still score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Template {
    /// Template identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Display title. Accepts `name` as an alias.
    #[serde(alias = "name", deserialize_with = "null_as_default")]
    pub title: String,
    /// Short description shown in listings.
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Full template body (README, scaffold notes).
    pub content: Option<String>,
    /// Marketplace category.
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    /// Author-assigned tags.
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Number of listing views.
    #[serde(deserialize_with = "null_as_default")]
    pub views: u64,
    /// Number of evaluations submitted.
    #[serde(deserialize_with = "null_as_default")]
    pub generations: u64,
    /// Average evaluator rating (0.0 - 5.0), if rated.
    pub rating: Option<f64>,
}

impl Template {
    /// Template body, empty when absent.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Title, description, and content joined and lower-cased.
    pub(crate) fn searchable_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.content()).to_lowercase()
    }
}

/// A user's interaction history used for personalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserHistory {
    /// Template ids the user has already viewed.
    #[serde(deserialize_with = "null_as_default")]
    pub viewed_templates: Vec<String>,
    /// Categories the user engages with most.
    #[serde(deserialize_with = "null_as_default")]
    pub favorite_categories: Vec<String>,
    /// Tags the user engages with most.
    #[serde(deserialize_with = "null_as_default")]
    pub favorite_tags: Vec<String>,
}

impl UserHistory {
    pub(crate) fn has_viewed(&self, template_id: &str) -> bool {
        self.viewed_templates.iter().any(|id| id == template_id)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
