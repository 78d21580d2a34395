//! Content view engine
//!
//! Pure derivation of the gallery view: filter by category key, then
//! substring search over title/description, then a stable sort. Works over
//! the full in-memory list; never mutates its input.

use serde::{Deserialize, Serialize};
use tekoa_client::{Content, ContentType};

/// Fixed category selector shown above the gallery
///
/// Each key maps to either "no filter" (`All`) or a required content type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKey {
    #[default]
    All,
    Stories,
    Crafts,
    Music,
    Language,
    Rituals,
}

impl FilterKey {
    /// The content type this key requires, or None for the `All` sentinel
    pub fn content_type(&self) -> Option<ContentType> {
        match self {
            FilterKey::All => None,
            FilterKey::Stories => Some(ContentType::Story),
            FilterKey::Crafts => Some(ContentType::Craft),
            FilterKey::Music => Some(ContentType::Music),
            FilterKey::Language => Some(ContentType::Language),
            FilterKey::Rituals => Some(ContentType::Ritual),
        }
    }

    /// Filter button label
    pub fn label(&self) -> &'static str {
        match self {
            FilterKey::All => "Todo Conteúdo",
            FilterKey::Stories => "Histórias",
            FilterKey::Crafts => "Artesanato Tradicional",
            FilterKey::Music => "Música e Dança",
            FilterKey::Language => "Línguas",
            FilterKey::Rituals => "Cerimônias e Rituais",
        }
    }
}

/// Sort field; `CreatedAt` is the explore default, the admin table also
/// sorts by title and type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "type")]
    Type,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Inputs to the view engine; doubles as the explore endpoint's query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    #[serde(default)]
    pub filter: FilterKey,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub sort: SortField,
    #[serde(default)]
    pub order: SortOrder,
}

/// Derive the ordered, filtered view of `items`
///
/// Filter stage, then search stage, then a stable sort; ties keep their
/// post-search relative order. Repeated calls with identical inputs yield
/// identical output.
pub fn apply(items: &[Content], query: &ViewQuery) -> Vec<Content> {
    let wanted = query.filter.content_type();
    let term = query.search.to_lowercase();

    let mut out: Vec<Content> = items
        .iter()
        .filter(|item| wanted.map_or(true, |t| item.content_type == t))
        .filter(|item| {
            term.is_empty()
                || item.title.to_lowercase().contains(&term)
                || item.description.to_lowercase().contains(&term)
        })
        .cloned()
        .collect();

    // Descending flips the comparator, not the result: reversing a stably
    // sorted vector would also reverse tied elements.
    let order = query.order;
    let directed = move |ord: std::cmp::Ordering| match order {
        SortOrder::Asc => ord,
        SortOrder::Desc => ord.reverse(),
    };
    match query.sort {
        SortField::CreatedAt => out.sort_by(|a, b| {
            directed(timestamp_ms(&a.created_at).cmp(&timestamp_ms(&b.created_at)))
        }),
        SortField::Title => {
            out.sort_by(|a, b| directed(a.title.to_lowercase().cmp(&b.title.to_lowercase())))
        }
        SortField::Type => {
            out.sort_by(|a, b| directed(a.content_type.as_str().cmp(b.content_type.as_str())))
        }
    }

    out
}

/// Millisecond timestamp of an ISO-8601 string; missing or unparseable
/// values sort as epoch 0
fn timestamp_ms(created_at: &str) -> i64 {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .map(|d| d.timestamp_millis())
        .unwrap_or(0)
}
