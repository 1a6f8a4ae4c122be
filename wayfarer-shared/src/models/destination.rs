use serde::{Deserialize, Serialize};

/// A travel destination as served by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Stable identifier used in `/destination/{id}`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category the destination belongs to (e.g. "Adventure").
    #[serde(rename = "type")]
    pub kind: String,
    /// Ordered image URLs shown in the carousel.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Destination {
    /// Creates a destination without images.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            images: Vec::new(),
        }
    }

    /// Replaces the image list.
    #[must_use]
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this destination belongs to category `kind` (ASCII case-insensitive).
    #[must_use]
    pub fn matches_kind(&self, kind: &str) -> bool {
        self.kind.eq_ignore_ascii_case(kind.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_serializes_kind_as_type() {
        let destination = Destination::new("d-1", "Patagonia", "Adventure")
            .with_images(["a.jpg", "b.jpg"]);
        let json = serde_json::to_value(&destination).unwrap();

        assert_eq!(json["type"], "Adventure");
        assert_eq!(json["images"][1], "b.jpg");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_destination_images_default_to_empty() {
        let destination: Destination =
            serde_json::from_str(r#"{"id":"d-2","name":"Kyoto","type":"Cultural"}"#).unwrap();
        assert!(destination.images.is_empty());
        assert_eq!(destination.kind, "Cultural");
    }

    #[test]
    fn test_matches_kind_ignores_case() {
        let destination = Destination::new("d-3", "Maldives", "Leisure");
        assert!(destination.matches_kind("Leisure"));
        assert!(destination.matches_kind("leisure"));
        assert!(destination.matches_kind(" LEISURE "));
        assert!(!destination.matches_kind("Adventure"));
    }
}
