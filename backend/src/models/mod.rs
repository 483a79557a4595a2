//! Domain models for archival resource records.
//!
//! These mirror the JSON shape the downstream description-management
//! system accepts for a collection-level resource:
//!
//! - [`ResourceRecord`] - one record per collection sheet row
//! - [`Extent`] - size of the collection
//! - [`DateRange`] - creation date, single or inclusive
//! - [`Note`] - descriptive note, tagged by `jsonmodel_type`
//! - [`RightsStatement`] - donor rights statement with condition notes
//! - [`LangMaterial`] - language and script of the materials

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Resource Record
// =============================================================================

/// Level of description. Collection sheets only describe whole collections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResourceLevel {
    #[default]
    Collection,
}

/// A collection-level archival resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceRecord {
    /// Opaque reference, unique within a run. Carries no meaning.
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id_0: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub id_3: Option<String>,
    pub title: String,
    #[serde(default)]
    pub level: ResourceLevel,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub repository_processing_note: Option<String>,
    #[serde(default)]
    pub extents: Vec<Extent>,
    #[serde(default)]
    pub dates: Vec<DateRange>,
    #[serde(default)]
    pub rights_statements: Vec<RightsStatement>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub finding_aid_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub finding_aid_script: Option<String>,
    #[serde(default)]
    pub lang_materials: Vec<LangMaterial>,
}

impl ResourceRecord {
    /// The four identifier segments, in slot order.
    pub fn identifier(&self) -> [Option<&str>; 4] {
        [
            self.id_0.as_deref(),
            self.id_1.as_deref(),
            self.id_2.as_deref(),
            self.id_3.as_deref(),
        ]
    }
}

// =============================================================================
// Extent
// =============================================================================

/// Whether an extent covers the whole resource or part of it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExtentPortion {
    Whole,
    Part,
}

/// Quantified size of a collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Extent {
    pub portion: ExtentPortion,
    pub extent_type: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub container_summary: Option<String>,
    pub number: String,
}

// =============================================================================
// Dates
// =============================================================================

/// Single point in time, or a span.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateType {
    Single,
    Inclusive,
}

/// What the date describes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateLabel {
    #[default]
    Creation,
}

/// A creation date attached to a resource.
///
/// `begin` and `end` hold normalized partial dates (`YYYY`, `YYYY-MM` or
/// `YYYY-MM-DD`) or the original text when it could not be recognised.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DateRange {
    pub date_type: DateType,
    #[serde(default)]
    pub label: DateLabel,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub begin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub end: Option<String>,
}

// =============================================================================
// Notes
// =============================================================================

/// Structural shape of a descriptive note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    /// Text wrapped in a nested text block.
    Multipart,
    /// Text stored directly as content.
    Singlepart,
    /// Text stored directly as content, bibliography-typed.
    Bibliography,
}

/// Nested text block inside a multipart note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "jsonmodel_type", rename = "note_text")]
pub struct NoteText {
    pub content: String,
}

/// A descriptive note on a resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "jsonmodel_type", rename_all = "snake_case")]
pub enum Note {
    NoteMultipart {
        #[serde(rename = "type")]
        note_type: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        label: Option<String>,
        subnotes: Vec<NoteText>,
    },
    NoteSinglepart {
        #[serde(rename = "type")]
        note_type: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        label: Option<String>,
        content: Vec<String>,
    },
    NoteBibliography {
        #[serde(rename = "type")]
        note_type: String,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        label: Option<String>,
        content: Vec<String>,
    },
}

impl Note {
    /// Wrap `text` in the shape dictated by `kind`.
    pub fn new(kind: NoteKind, note_type: &str, label: Option<&str>, text: &str) -> Self {
        let note_type = note_type.to_string();
        let label = label.map(String::from);
        match kind {
            NoteKind::Multipart => Note::NoteMultipart {
                note_type,
                label,
                subnotes: vec![NoteText { content: text.to_string() }],
            },
            NoteKind::Singlepart => Note::NoteSinglepart {
                note_type,
                label,
                content: vec![text.to_string()],
            },
            NoteKind::Bibliography => Note::NoteBibliography {
                note_type,
                label,
                content: vec![text.to_string()],
            },
        }
    }

    pub fn kind(&self) -> NoteKind {
        match self {
            Note::NoteMultipart { .. } => NoteKind::Multipart,
            Note::NoteSinglepart { .. } => NoteKind::Singlepart,
            Note::NoteBibliography { .. } => NoteKind::Bibliography,
        }
    }

    /// Type code, e.g. `scopecontent`.
    pub fn note_type(&self) -> &str {
        match self {
            Note::NoteMultipart { note_type, .. }
            | Note::NoteSinglepart { note_type, .. }
            | Note::NoteBibliography { note_type, .. } => note_type,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Note::NoteMultipart { label, .. }
            | Note::NoteSinglepart { label, .. }
            | Note::NoteBibliography { label, .. } => label.as_deref(),
        }
    }

    /// The note's text, whichever shape holds it.
    pub fn text(&self) -> Option<&str> {
        match self {
            Note::NoteMultipart { subnotes, .. } => subnotes.first().map(|s| s.content.as_str()),
            Note::NoteSinglepart { content, .. } | Note::NoteBibliography { content, .. } => {
                content.first().map(String::as_str)
            }
        }
    }
}

// =============================================================================
// Rights
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RightsType {
    #[default]
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OtherRightsBasis {
    #[default]
    Donor,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RightsNoteType {
    #[default]
    AdditionalInformation,
}

/// A condition attached to a rights statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "jsonmodel_type", rename = "note_rights_statement")]
pub struct RightsNote {
    pub label: String,
    #[serde(rename = "type", default)]
    pub note_type: RightsNoteType,
    pub content: Vec<String>,
}

/// Donor rights statement. Every record carries exactly one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RightsStatement {
    #[serde(default)]
    pub rights_type: RightsType,
    #[serde(default)]
    pub other_rights_basis: OtherRightsBasis,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub notes: Vec<RightsNote>,
}

// =============================================================================
// Language of Materials
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageAndScript {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub script: Option<String>,
}

/// Language and script of the described materials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LangMaterial {
    pub language_and_script: LanguageAndScript,
}

impl LangMaterial {
    /// Pair a language and script. `None` when both are absent.
    pub fn from_optional(language: Option<&str>, script: Option<&str>) -> Option<Self> {
        if language.is_none() && script.is_none() {
            return None;
        }
        Some(Self {
            language_and_script: LanguageAndScript {
                language: language.map(String::from),
                script: script.map(String::from),
            },
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_multipart_note_shape() {
        let note = Note::new(NoteKind::Multipart, "odd", Some("Subjects"), "Mining; Labour");
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(
            value,
            json!({
                "jsonmodel_type": "note_multipart",
                "type": "odd",
                "label": "Subjects",
                "subnotes": [{ "jsonmodel_type": "note_text", "content": "Mining; Labour" }]
            })
        );
    }

    #[test]
    fn test_singlepart_and_bibliography_store_direct_content() {
        let single = serde_json::to_value(Note::new(NoteKind::Singlepart, "physdesc", None, "3 boxes")).unwrap();
        assert_eq!(single["jsonmodel_type"], "note_singlepart");
        assert_eq!(single["content"], json!(["3 boxes"]));
        assert!(single.get("label").is_none());

        let bib = serde_json::to_value(Note::new(NoteKind::Bibliography, "bibliography", None, "Smith 1990")).unwrap();
        assert_eq!(bib["jsonmodel_type"], "note_bibliography");
        assert_eq!(bib["content"], json!(["Smith 1990"]));
        assert!(bib.get("subnotes").is_none());
    }

    #[test]
    fn test_note_accessors() {
        let note = Note::new(NoteKind::Multipart, "bioghist", None, "Born 1901");
        assert_eq!(note.kind(), NoteKind::Multipart);
        assert_eq!(note.note_type(), "bioghist");
        assert_eq!(note.label(), None);
        assert_eq!(note.text(), Some("Born 1901"));
    }

    #[test]
    fn test_rights_note_shape() {
        let note = RightsNote {
            label: "Granted Notes".into(),
            note_type: RightsNoteType::AdditionalInformation,
            content: vec!["Granted 2001".into()],
        };
        assert_eq!(
            serde_json::to_value(&note).unwrap(),
            json!({
                "jsonmodel_type": "note_rights_statement",
                "label": "Granted Notes",
                "type": "additional_information",
                "content": ["Granted 2001"]
            })
        );
    }

    #[test]
    fn test_rights_statement_date_is_iso() {
        let statement = RightsStatement {
            rights_type: RightsType::Other,
            other_rights_basis: OtherRightsBasis::Donor,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            notes: vec![],
        };
        let value = serde_json::to_value(&statement).unwrap();
        assert_eq!(value["rights_type"], "other");
        assert_eq!(value["other_rights_basis"], "donor");
        assert_eq!(value["start_date"], "2024-03-09");
        assert_eq!(value["notes"], json!([]));
    }

    #[test]
    fn test_lang_material_from_optional() {
        assert!(LangMaterial::from_optional(None, None).is_none());

        let only_script = LangMaterial::from_optional(None, Some("Latn")).unwrap();
        let value = serde_json::to_value(&only_script).unwrap();
        assert_eq!(value, json!({ "language_and_script": { "script": "Latn" } }));
    }

    #[test]
    fn test_record_roundtrip_keeps_shape() {
        let json = json!({
            "uri": "/repositories/1/resources/import_abc",
            "id_0": "MS 1",
            "title": "Papers",
            "level": "collection",
            "rights_statements": [{
                "rights_type": "other",
                "other_rights_basis": "donor",
                "start_date": "2024-01-01",
                "notes": []
            }]
        });
        let record: ResourceRecord = serde_json::from_value(json).unwrap();
        assert_eq!(record.identifier(), [Some("MS 1"), None, None, None]);
        assert_eq!(record.level, ResourceLevel::Collection);
        assert!(record.notes.is_empty());

        let back = serde_json::to_value(&record).unwrap();
        assert!(back.get("id_1").is_none());
        assert!(back.get("repository_processing_note").is_none());
    }
}
