//! Wire types for the content store API
//!
//! The store speaks camelCase JSON (`imageUrl`, `createdAt`, `likesCount`);
//! the structs here carry the serde renames so the rest of the codebase can
//! stay snake_case.

use serde::{Deserialize, Serialize};

/// Client configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the content store (no trailing slash)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Kind of cultural artifact a content record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Story,
    Craft,
    Music,
    Language,
    Ritual,
}

impl ContentType {
    /// Wire name of this type
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Story => "story",
            ContentType::Craft => "craft",
            ContentType::Music => "music",
            ContentType::Language => "language",
            ContentType::Ritual => "ritual",
        }
    }

    /// Human label, shared by every renderer
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Story => "História",
            ContentType::Craft => "Artesanato",
            ContentType::Music => "Música",
            ContentType::Language => "Língua",
            ContentType::Ritual => "Ritual",
        }
    }
}

/// A cultural content record as returned by the store
///
/// `id` and `created_at` are server-assigned and never mutated by this side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// ISO-8601 creation timestamp, assigned by the store
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes_count: Option<u64>,
}

/// A content category, read-only from this side
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<Content>>,
}

/// Draft body for create and update operations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDraft {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

impl ContentDraft {
    /// Validate the draft before any request is sent
    ///
    /// A failed validation blocks the network call entirely and names the
    /// offending field.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::StoreError;

        if self.title.trim().is_empty() {
            return Err(StoreError::Validation {
                field: "title",
                message: "Título é obrigatório".to_string(),
            });
        }
        if self.description.trim().is_empty() {
            return Err(StoreError::Validation {
                field: "description",
                message: "Descrição é obrigatória".to_string(),
            });
        }
        if self.image_url.is_empty() {
            return Err(StoreError::Validation {
                field: "imageUrl",
                message: "URL da imagem é obrigatória".to_string(),
            });
        }
        if !is_valid_image_url(&self.image_url) {
            return Err(StoreError::Validation {
                field: "imageUrl",
                message: "URL da imagem inválida".to_string(),
            });
        }
        Ok(())
    }
}

/// Accepts site-relative paths ("/...") or absolute http(s) URLs with a
/// dotted host
fn is_valid_image_url(url: &str) -> bool {
    if url.starts_with('/') {
        return true;
    }
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) => rest
            .find('.')
            .map(|i| i > 0 && i + 1 < rest.len())
            .unwrap_or(false),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContentDraft {
        ContentDraft {
            title: "Lenda da Vitória-régia".to_string(),
            description: "A origem da flor que nasce das águas".to_string(),
            content_type: ContentType::Story,
            ethnicity: Some("Tupi-Guarani".to_string()),
            region: Some("Norte".to_string()),
            image_url: "https://example.com/vitoria.jpg".to_string(),
            creator: None,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        let err = d.validate().unwrap_err();
        assert!(matches!(
            err,
            crate::error::StoreError::Validation { field: "title", .. }
        ));
    }

    #[test]
    fn empty_description_is_rejected() {
        let mut d = draft();
        d.description = String::new();
        assert!(d.validate().is_err());
    }

    #[test]
    fn image_url_accepts_relative_and_absolute() {
        let mut d = draft();
        d.image_url = "/images/ceramica.png".to_string();
        assert!(d.validate().is_ok());

        d.image_url = "http://museu.org/pecas/1.jpg".to_string();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn image_url_rejects_schemeless_and_dotless() {
        let mut d = draft();
        d.image_url = "museu.org/pecas/1.jpg".to_string();
        assert!(d.validate().is_err());

        d.image_url = "https://localhost".to_string();
        assert!(d.validate().is_err());
    }

    #[test]
    fn content_round_trips_camel_case() {
        let json = r#"{
            "id": 7,
            "title": "Canto do Maracá",
            "type": "music",
            "description": "Registro de canto cerimonial",
            "imageUrl": "/images/maraca.jpg",
            "ethnicity": "Guarani",
            "createdAt": "2023-04-01T12:00:00Z",
            "likesCount": 12
        }"#;

        let content: Content = serde_json::from_str(json).expect("valid content JSON");
        assert_eq!(content.id, 7);
        assert_eq!(content.content_type, ContentType::Music);
        assert_eq!(content.image_url.as_deref(), Some("/images/maraca.jpg"));
        assert_eq!(content.likes_count, Some(12));
        assert_eq!(content.creator, None);

        let back = serde_json::to_value(&content).expect("serializes");
        assert_eq!(back["type"], "music");
        assert_eq!(back["imageUrl"], "/images/maraca.jpg");
        assert_eq!(back["createdAt"], "2023-04-01T12:00:00Z");
    }

    #[test]
    fn type_labels_cover_every_variant() {
        assert_eq!(ContentType::Story.label(), "História");
        assert_eq!(ContentType::Craft.label(), "Artesanato");
        assert_eq!(ContentType::Music.label(), "Música");
        assert_eq!(ContentType::Language.label(), "Língua");
        assert_eq!(ContentType::Ritual.label(), "Ritual");
    }
}
