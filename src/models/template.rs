//! Starting templates and the catalog they are looked up in.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Name of the built-in template used by the "new file" quick action.
pub const EMPTY_TEMPLATE_NAME: &str = "Empty";

/// A named starting configuration a user can build a new document from.
///
/// The start screen treats the record as opaque: it only compares names and
/// hands the whole record to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Display name, also the lookup key
    pub name: String,
    /// One-line summary shown in the template dialogs
    #[serde(default)]
    pub description: String,
    /// Initial dataset the editor opens with
    #[serde(default)]
    pub dataset: Value,
}

impl Template {
    /// Creates a template from its parts.
    pub fn new(name: impl Into<String>, description: impl Into<String>, dataset: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            dataset,
        }
    }
}

/// Read-only catalog of creation templates and authentication templates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
    auth_templates: Vec<Template>,
}

impl TemplateCatalog {
    /// Creates a catalog from explicit template lists.
    #[must_use]
    pub fn new(templates: Vec<Template>, auth_templates: Vec<Template>) -> Self {
        Self {
            templates,
            auth_templates,
        }
    }

    /// The templates shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let templates = vec![
            Template::new(
                EMPTY_TEMPLATE_NAME,
                "Start with a blank dataset",
                json!({ "interface": {}, "samples": [] }),
            ),
            Template::new(
                "Image Classification",
                "Assign one or more labels to each image",
                json!({
                    "interface": {
                        "type": "image_classification",
                        "labels": ["valid", "invalid"],
                    },
                    "samples": [],
                }),
            ),
            Template::new(
                "Image Segmentation",
                "Draw boxes, polygons and points over images",
                json!({
                    "interface": {
                        "type": "image_segmentation",
                        "labels": [],
                        "regionTypesAllowed": ["bounding-box", "polygon", "point"],
                    },
                    "samples": [],
                }),
            ),
            Template::new(
                "Named Entity Recognition",
                "Highlight and label spans of text",
                json!({
                    "interface": {
                        "type": "text_entity_recognition",
                        "overlapAllowed": false,
                        "labels": [],
                    },
                    "samples": [],
                }),
            ),
            Template::new(
                "Text Classification",
                "Label whole documents or sentences",
                json!({
                    "interface": { "type": "text_classification", "labels": [] },
                    "samples": [],
                }),
            ),
            Template::new(
                "Audio Transcription",
                "Transcribe audio clips to text",
                json!({
                    "interface": { "type": "audio_transcription", "description": "" },
                    "samples": [],
                }),
            ),
            Template::new(
                "Data Entry",
                "Fill out a form for every sample",
                json!({
                    "interface": { "type": "data_entry", "surveyjs": { "questions": [] } },
                    "samples": [],
                }),
            ),
            Template::new(
                "Video Segmentation",
                "Track regions across video frames",
                json!({
                    "interface": { "type": "video_segmentation", "labels": [] },
                    "samples": [],
                }),
            ),
        ];

        let auth_templates = vec![
            Template::new(
                "AWS Cognito",
                "Sign in with Cognito and store samples in S3",
                json!({
                    "interface": {},
                    "samples": [],
                    "auth": {
                        "provider": "cognito",
                        "region": "",
                        "userPoolId": "",
                        "userPoolWebClientId": "",
                        "identityPoolId": "",
                        "storage": { "bucket": "", "region": "" },
                    },
                }),
            ),
            Template::new(
                "None",
                "Open without authentication",
                json!({ "interface": {}, "samples": [], "auth": { "provider": "none" } }),
            ),
        ];

        Self::new(templates, auth_templates)
    }

    /// Templates offered by the create-from-template dialog, in display order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Templates offered by the add-authentication dialog, in display order.
    pub fn auth_templates(&self) -> &[Template] {
        &self.auth_templates
    }

    /// Looks up a creation template by exact name.
    pub fn find(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// The built-in blank template, if the catalog carries one.
    pub fn empty(&self) -> Option<&Template> {
        self.find(EMPTY_TEMPLATE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_empty() {
        let catalog = TemplateCatalog::builtin();
        let empty = catalog.empty().unwrap();
        assert_eq!(empty.name, "Empty");
        assert_eq!(empty.dataset["samples"], json!([]));
    }

    #[test]
    fn test_find_is_exact_match() {
        let catalog = TemplateCatalog::builtin();
        assert!(catalog.find("Image Classification").is_some());
        assert!(catalog.find("image classification").is_none());
        assert!(catalog.find("Missing").is_none());
    }

    #[test]
    fn test_builtin_names_unique() {
        let catalog = TemplateCatalog::builtin();
        let mut names: Vec<&str> = catalog.templates().iter().map(|t| t.name.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_auth_templates_are_separate() {
        let catalog = TemplateCatalog::builtin();
        assert!(!catalog.auth_templates().is_empty());
        for auth in catalog.auth_templates() {
            assert!(auth.dataset.get("auth").is_some());
            assert!(catalog.find(&auth.name).is_none());
        }
    }

    #[test]
    fn test_empty_catalog_has_no_empty_template() {
        assert!(TemplateCatalog::default().empty().is_none());
    }
}
