use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::hash::{Hash, Hasher};

/// One film entry as served by the films endpoint.
///
/// Only `id` and `title` are required. Every other field is optional and
/// string-typed on the wire, including the year, running time and score,
/// which are passed through without being parsed as numbers.
///
/// Identity and equality are defined by `id` alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    pub id: String,
    pub title: String,
    /// Title in the original language (e.g. Japanese script)
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub original_title_romanised: Option<String>,
    /// Synopsis
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    /// Release year, e.g. "1988"
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// Running time in minutes, e.g. "124"
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub running_time: Option<String>,
    /// Rotten Tomatoes score
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub rt_score: Option<String>,
    /// Poster image URL
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Banner image URL
    #[serde(default, deserialize_with = "optional_text", skip_serializing_if = "Option::is_none")]
    pub movie_banner: Option<String>,
}

impl Film {
    /// Create a film with only the required fields set
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            original_title: None,
            original_title_romanised: None,
            description: None,
            director: None,
            producer: None,
            release_date: None,
            running_time: None,
            rt_score: None,
            image: None,
            movie_banner: None,
        }
    }

    /// Check if every optional field is absent
    pub fn is_sparse(&self) -> bool {
        self.original_title.is_none()
            && self.original_title_romanised.is_none()
            && self.description.is_none()
            && self.director.is_none()
            && self.producer.is_none()
            && self.release_date.is_none()
            && self.running_time.is_none()
            && self.rt_score.is_none()
            && self.image.is_none()
            && self.movie_banner.is_none()
    }
}

impl PartialEq for Film {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Film {}

impl Hash for Film {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Optional text fields never fail a record: strings pass through, numbers are
/// stringified, and null or any other JSON type becomes `None`.
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}
