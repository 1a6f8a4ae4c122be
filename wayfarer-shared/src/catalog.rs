//! Collaborators that supply and accept destination data.
//!
//! No real data source is wired in yet: the client runs on [`EmptyCatalog`]
//! and [`PendingSubmitter`]. [`StaticCatalog`] serves a fixed list and is the
//! seeding point for bundled JSON data.

use thiserror::Error;
use tracing::info;

use crate::models::{Destination, FormDraft, FormErrors};

/// Failure to create a destination.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The draft was rejected field by field.
    #[error("the submitted destination is invalid")]
    Validation(FormErrors),
    /// The endpoint could not be reached or failed.
    #[error("submission failed: {0}")]
    Transport(String),
}

/// Read access to destinations.
pub trait DestinationCatalog {
    /// Every destination in category `kind`.
    fn list_destinations(&self, kind: &str) -> Vec<Destination>;

    /// The destination with identifier `id`, if any.
    fn get_destination(&self, id: &str) -> Option<Destination>;
}

/// Write access for the admin form.
pub trait DestinationSubmitter {
    /// Creates a destination from `draft`.
    ///
    /// # Errors
    /// [`SubmitError::Validation`] when the draft is rejected,
    /// [`SubmitError::Transport`] when the endpoint fails.
    fn create_destination(&self, draft: &FormDraft) -> Result<(), SubmitError>;
}

/// A catalog with no destinations.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCatalog;

impl DestinationCatalog for EmptyCatalog {
    fn list_destinations(&self, _kind: &str) -> Vec<Destination> {
        Vec::new()
    }

    fn get_destination(&self, _id: &str) -> Option<Destination> {
        None
    }
}

/// A catalog over a fixed in-memory list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCatalog {
    destinations: Vec<Destination>,
}

impl StaticCatalog {
    /// Wraps `destinations`.
    #[must_use]
    pub fn new(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    /// Parses a JSON array of destinations.
    ///
    /// # Errors
    /// Returns the parser error when `json` is not a destination array.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    /// Number of destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    /// Whether the catalog holds no destinations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

impl DestinationCatalog for StaticCatalog {
    fn list_destinations(&self, kind: &str) -> Vec<Destination> {
        self.destinations
            .iter()
            .filter(|destination| destination.matches_kind(kind))
            .cloned()
            .collect()
    }

    fn get_destination(&self, id: &str) -> Option<Destination> {
        self.destinations
            .iter()
            .find(|destination| destination.id == id)
            .cloned()
    }
}

/// Placeholder submission endpoint: re-validates, logs, and accepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingSubmitter;

impl DestinationSubmitter for PendingSubmitter {
    fn create_destination(&self, draft: &FormDraft) -> Result<(), SubmitError> {
        let errors = draft.validate();
        if !errors.is_empty() {
            return Err(SubmitError::Validation(errors));
        }
        info!(
            name = %draft.name,
            kind = %draft.kind,
            high_demand = draft.high_demand,
            "destination accepted; no submission endpoint configured"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldChange, TextField};

    fn sample() -> StaticCatalog {
        StaticCatalog::new(vec![
            Destination::new("patagonia", "Patagonia", "Adventure")
                .with_images(["p1.jpg", "p2.jpg"]),
            Destination::new("kyoto", "Kyoto", "Cultural"),
            Destination::new("nepal", "Annapurna Circuit", "adventure"),
        ])
    }

    #[test]
    fn test_empty_catalog_has_nothing() {
        assert!(EmptyCatalog.list_destinations("Adventure").is_empty());
        assert_eq!(EmptyCatalog.get_destination("patagonia"), None);
    }

    #[test]
    fn test_static_catalog_filters_by_kind() {
        let catalog = sample();
        let ids: Vec<_> = catalog
            .list_destinations("Adventure")
            .into_iter()
            .map(|destination| destination.id)
            .collect();
        assert_eq!(ids, vec!["patagonia", "nepal"]);
        assert!(catalog.list_destinations("Leisure").is_empty());
    }

    #[test]
    fn test_static_catalog_lookup() {
        let catalog = sample();
        let found = catalog.get_destination("patagonia").unwrap();
        assert_eq!(found.images.len(), 2);
        assert_eq!(catalog.get_destination("atlantis"), None);
    }

    #[test]
    fn test_static_catalog_from_json() {
        let catalog = StaticCatalog::from_json(
            r#"[{"id":"bali","name":"Bali","type":"Leisure","images":["b.jpg"]}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.list_destinations("leisure")[0].name, "Bali");

        assert!(StaticCatalog::from_json("{}").is_err());
        assert!(StaticCatalog::default().is_empty());
    }

    #[test]
    fn test_pending_submitter_rejects_invalid_draft() {
        let result = PendingSubmitter.create_destination(&FormDraft::default());
        match result {
            Err(SubmitError::Validation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_pending_submitter_accepts_valid_draft() {
        let draft = FormDraft::default()
            .with(FieldChange::text(TextField::Name, "Bali"))
            .with(FieldChange::text(TextField::Kind, "Leisure"));
        assert_eq!(PendingSubmitter.create_destination(&draft), Ok(()));
    }

    #[test]
    fn test_submit_error_display() {
        assert_eq!(
            SubmitError::Transport("timeout".into()).to_string(),
            "submission failed: timeout"
        );
    }
}
