//! # Project Data Structures
//!
//! The `Project` struct is the root container for a set of design cases,
//! for example every road section of one job, or the same section under
//! several traffic forecasts. Projects serialize to human-readable JSON;
//! writing them to disk is left to the caller.
//!
//! ## Structure
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (version, title, engineer, timestamps)
//! ├── settings: ProjectSettings (solver configuration)
//! └── items: HashMap<Uuid, CalculationItem> (all design cases)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use pave_core::project::Project;
//!
//! let project = Project::new("Highway 12 Widening", "Jane Engineer");
//!
//! let json = project.to_json().unwrap();
//! let restored = Project::from_json(&json).unwrap();
//! assert_eq!(restored.meta.title, "Highway 12 Widening");
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{CalculationItem, DesignResult, SolverSettings};
use crate::errors::{PaveError, PaveResult};

/// Current schema version for project JSON
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root project container.
///
/// Items are stored in a flat UUID-keyed map for O(1) lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project metadata (version, title, engineer)
    pub meta: ProjectMetadata,

    /// Project-wide settings
    pub settings: ProjectSettings,

    /// All design cases, keyed by UUID
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Create a new empty project.
    ///
    /// # Arguments
    ///
    /// * `title` - Project title
    /// * `engineer` - Name of the responsible engineer
    pub fn new(title: impl Into<String>, engineer: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                title: title.into(),
                engineer: engineer.into(),
                created: now,
                modified: now,
            },
            settings: ProjectSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Add a design case to the project.
    ///
    /// Returns the UUID assigned to the item.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    /// Remove a design case by UUID.
    ///
    /// Returns the removed item if it existed.
    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let item = self.items.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Get a design case by UUID.
    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Get a mutable reference to a design case by UUID.
    ///
    /// Marks the project as modified when the item exists.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut CalculationItem> {
        if self.items.contains_key(id) {
            self.meta.modified = Utc::now();
            self.items.get_mut(id)
        } else {
            None
        }
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    /// Number of design cases.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Evaluate every design case with the project solver settings.
    ///
    /// Cases are independent: one failing case does not affect the others.
    pub fn evaluate_all(&self) -> HashMap<Uuid, PaveResult<DesignResult>> {
        self.items
            .iter()
            .map(|(id, item)| (*id, item.evaluate(&self.settings.solver)))
            .collect()
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> PaveResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON, rejecting unknown schema versions.
    pub fn from_json(json: &str) -> PaveResult<Self> {
        let project: Project = serde_json::from_str(json)?;
        if project.meta.version != SCHEMA_VERSION {
            return Err(PaveError::serialization(format!(
                "Unsupported schema version {} (expected {})",
                project.meta.version, SCHEMA_VERSION
            )));
        }
        Ok(project)
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "")
    }
}

/// Project metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Project title
    pub title: String,

    /// Name of the responsible engineer
    pub engineer: String,

    /// When the project was created
    pub created: DateTime<Utc>,

    /// When the project was last modified
    pub modified: DateTime<Utc>,
}

/// Project-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Design standard (e.g., "AASHTO 1993")
    pub design_standard: String,

    /// Root-finder configuration used for every case
    #[serde(default)]
    pub solver: SolverSettings,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        ProjectSettings {
            design_standard: "AASHTO 1993".to_string(),
            solver: SolverSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{DesignInputs, FlexibleDesignInput, PavementLayer};

    fn design(label: &str, design_esals: f64) -> CalculationItem {
        CalculationItem::FlexibleDesign(FlexibleDesignInput {
            label: label.to_string(),
            inputs: DesignInputs {
                design_esals,
                reliability_zr: -1.282,
                overall_std_dev: 0.45,
                initial_serviceability: 4.2,
                terminal_serviceability: 2.5,
                subgrade_modulus_psi: 5000.0,
            },
            layers: vec![
                PavementLayer::new(0.44, 10.0, 1.0),
                PavementLayer::new(0.23, 20.0, 1.0),
                PavementLayer::new(0.11, 15.0, 1.0),
            ],
        })
    }

    #[test]
    fn test_project_creation() {
        let project = Project::new("Ring Road", "John Doe");
        assert_eq!(project.meta.title, "Ring Road");
        assert_eq!(project.meta.engineer, "John Doe");
        assert_eq!(project.meta.version, SCHEMA_VERSION);
        assert_eq!(project.settings.solver, SolverSettings::default());
    }

    #[test]
    fn test_add_remove_item() {
        let mut project = Project::new("Ring Road", "Engineer");
        let id = project.add_item(design("Section A", 5.0e6));
        assert_eq!(project.item_count(), 1);
        assert_eq!(project.get_item(&id).map(|i| i.label()), Some("Section A"));
        assert_eq!(project.get_item(&id).map(|i| i.calc_type()), Some("FlexibleDesign"));

        let removed = project.remove_item(&id);
        assert!(removed.is_some());
        assert_eq!(project.item_count(), 0);
        assert!(project.remove_item(&id).is_none());
    }

    #[test]
    fn test_evaluate_all_isolates_cases() {
        let mut project = Project::new("Ring Road", "Engineer");
        let light = project.add_item(design("Light", 1.0e6));
        let heavy = project.add_item(design("Heavy", 5.0e6));
        let broken = project.add_item(design("Broken", 1.0e20));

        let results = project.evaluate_all();
        assert_eq!(results.len(), 3);
        assert!(results[&light].as_ref().unwrap().passes());
        assert!(!results[&heavy].as_ref().unwrap().passes());
        assert!(results[&broken].is_err());
    }

    #[test]
    fn test_project_serialization() {
        let mut project = Project::new("Ring Road", "Jane Engineer");
        project.add_item(design("Section A", 5.0e6));

        let json = project.to_json().unwrap();
        assert!(json.contains("Jane Engineer"));
        assert!(json.contains("AASHTO 1993"));
        assert!(json.contains("\"type\": \"FlexibleDesign\""));

        let roundtrip = Project::from_json(&json).unwrap();
        assert_eq!(roundtrip.item_count(), 1);
    }

    #[test]
    fn test_unknown_version_rejected() {
        let mut project = Project::new("Ring Road", "Engineer");
        project.meta.version = "9.9.9".to_string();
        let json = project.to_json().unwrap();
        let err = Project::from_json(&json).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Project::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }
}
