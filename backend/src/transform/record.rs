//! Resource record assembly for one sheet row.

use chrono::NaiveDate;
use uuid::Uuid;

use super::dates;
use super::notes::{self, NOTE_SPECS};
use super::rights;
use super::row::{Column, FieldRow};
use crate::models::{Extent, ExtentPortion, LangMaterial, ResourceLevel, ResourceRecord};

/// Builds resource records for a single repository.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    repository_id: u32,
    rights_start_date: NaiveDate,
}

impl RecordBuilder {
    pub fn new(repository_id: u32, rights_start_date: NaiveDate) -> Self {
        Self {
            repository_id,
            rights_start_date,
        }
    }

    /// Fresh import reference; a random 128-bit hex token under the repository.
    fn next_uri(&self) -> String {
        format!(
            "/repositories/{}/resources/import_{}",
            self.repository_id,
            Uuid::new_v4().simple()
        )
    }

    /// Build the resource record for `row`.
    pub fn build(&self, row: &FieldRow) -> ResourceRecord {
        ResourceRecord {
            uri: self.next_uri(),
            // whole resource id goes in the first slot
            id_0: row.get(Column::ResourceId).map(String::from),
            id_1: None,
            id_2: None,
            id_3: None,
            title: row.title().to_string(),
            level: ResourceLevel::Collection,
            repository_processing_note: processing_note(row),
            extents: extent(row, ExtentPortion::Whole).into_iter().collect(),
            dates: dates::normalize(
                row.get(Column::DateExpression),
                row.get(Column::DateBegin),
                row.get(Column::DateEnd),
            )
            .into_iter()
            .collect(),
            rights_statements: vec![rights::build(row, self.rights_start_date)],
            notes: notes::compose(row, &NOTE_SPECS),
            finding_aid_language: row.get(Column::FindingAidLanguage).map(String::from),
            finding_aid_script: row.get(Column::FindingAidScript).map(String::from),
            lang_materials: LangMaterial::from_optional(
                row.get(Column::LangMaterials),
                row.get(Column::ScriptMaterials),
            )
            .into_iter()
            .collect(),
        }
    }
}

/// Both processing note columns joined by a space, `None` when both are absent.
pub fn processing_note(row: &FieldRow) -> Option<String> {
    let parts: Vec<&str> = [Column::ProcessingNote1, Column::ProcessingNote2]
        .iter()
        .filter_map(|c| row.get(*c))
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Extent for the row, present only when both number and type are given.
pub fn extent(row: &FieldRow, portion: ExtentPortion) -> Option<Extent> {
    let number = row.get(Column::ExtentNumber)?;
    let extent_type = row.get(Column::ExtentType)?;

    Some(Extent {
        portion,
        extent_type: extent_type.to_string(),
        container_summary: row.get(Column::ExtentContainerSummary).map(String::from),
        number: number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DateType, NoteKind};
    use serde_json::json;
    use std::collections::HashSet;

    fn builder() -> RecordBuilder {
        RecordBuilder::new(12345, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    fn row(fields: &[(Column, &str)]) -> FieldRow {
        FieldRow::from_fields(fields.iter().copied()).unwrap()
    }

    #[test]
    fn test_smith_papers() {
        let row = row(&[
            (Column::Title, "Smith Papers"),
            (Column::ResourceId, "MS 123"),
            (Column::AccessConditions, "Restricted"),
            (Column::DateBegin, "01/02/1950"),
            (Column::DateEnd, "01/02/1960"),
            (Column::ExtentNumber, "3"),
            (Column::ExtentType, "boxes"),
        ]);
        let record = builder().build(&row);

        assert_eq!(record.identifier(), [Some("MS 123"), None, None, None]);
        assert_eq!(record.title, "Smith Papers");
        assert_eq!(record.level, ResourceLevel::Collection);

        assert_eq!(record.dates.len(), 1);
        assert_eq!(record.dates[0].date_type, DateType::Inclusive);
        assert_eq!(record.dates[0].begin.as_deref(), Some("1950-02-01"));
        assert_eq!(record.dates[0].end.as_deref(), Some("1960-02-01"));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["extents"], json!([{ "portion": "whole", "extent_type": "boxes", "number": "3" }]));

        assert_eq!(record.rights_statements.len(), 1);
        let rights_notes = &record.rights_statements[0].notes;
        assert_eq!(rights_notes.len(), 1);
        assert!(rights_notes[0].label.starts_with("Access Conditions"));
        assert_eq!(rights_notes[0].content, vec!["Restricted".to_string()]);

        assert!(record.notes.is_empty());
        assert!(record.lang_materials.is_empty());
        assert_eq!(record.repository_processing_note, None);
    }

    #[test]
    fn test_minimal_row() {
        let record = builder().build(&row(&[(Column::Title, "Papers")]));

        assert_eq!(record.identifier(), [None, None, None, None]);
        assert!(record.extents.is_empty());
        assert!(record.dates.is_empty());
        assert_eq!(record.rights_statements.len(), 1);
        assert!(record.rights_statements[0].notes.is_empty());
    }

    #[test]
    fn test_resource_id_kept_whole() {
        let record = builder().build(&row(&[(Column::Title, "Papers"), (Column::ResourceId, "MS 12 A 3")]));
        assert_eq!(record.id_0.as_deref(), Some("MS 12 A 3"));
        assert_eq!(record.id_1, None);
    }

    #[test]
    fn test_extent_requires_number_and_type() {
        let only_number = row(&[(Column::Title, "P"), (Column::ExtentNumber, "3")]);
        assert!(extent(&only_number, ExtentPortion::Whole).is_none());

        let only_type = row(&[(Column::Title, "P"), (Column::ExtentType, "boxes")]);
        assert!(extent(&only_type, ExtentPortion::Whole).is_none());

        let full = row(&[
            (Column::Title, "P"),
            (Column::ExtentNumber, "2"),
            (Column::ExtentType, "volumes"),
            (Column::ExtentContainerSummary, "2 bound volumes"),
        ]);
        let ext = extent(&full, ExtentPortion::Whole).unwrap();
        assert_eq!(ext.portion, ExtentPortion::Whole);
        assert_eq!(ext.container_summary.as_deref(), Some("2 bound volumes"));
    }

    #[test]
    fn test_processing_note_join() {
        let both = row(&[
            (Column::Title, "P"),
            (Column::ProcessingNote1, "Sorted 2001."),
            (Column::ProcessingNote2, "Reboxed 2010."),
        ]);
        assert_eq!(processing_note(&both).as_deref(), Some("Sorted 2001. Reboxed 2010."));

        let second_only = row(&[(Column::Title, "P"), (Column::ProcessingNote2, "Reboxed")]);
        assert_eq!(processing_note(&second_only).as_deref(), Some("Reboxed"));

        assert_eq!(processing_note(&row(&[(Column::Title, "P")])), None);
    }

    #[test]
    fn test_language_fields() {
        let record = builder().build(&row(&[
            (Column::Title, "P"),
            (Column::LangMaterials, "eng"),
            (Column::FindingAidLanguage, "eng"),
            (Column::FindingAidScript, "Latn"),
        ]));

        assert_eq!(record.finding_aid_language.as_deref(), Some("eng"));
        assert_eq!(record.finding_aid_script.as_deref(), Some("Latn"));
        assert_eq!(record.lang_materials.len(), 1);
        let pair = &record.lang_materials[0].language_and_script;
        assert_eq!(pair.language.as_deref(), Some("eng"));
        assert_eq!(pair.script, None);
    }

    #[test]
    fn test_notes_merged() {
        let record = builder().build(&row(&[
            (Column::Title, "P"),
            (Column::NoteScopeAndContent, "Letters and diaries"),
            (Column::NoteConditionsGoverningAccess, "Open"),
        ]));

        let types: Vec<&str> = record.notes.iter().map(|n| n.note_type()).collect();
        assert_eq!(types, vec!["accessrestrict", "scopecontent"]);
        assert!(record.notes.iter().all(|n| n.kind() == NoteKind::Multipart));
    }

    #[test]
    fn test_uri_unique_per_record() {
        let b = builder();
        let r = row(&[(Column::Title, "P")]);
        let uris: HashSet<String> = (0..200).map(|_| b.build(&r).uri).collect();
        assert_eq!(uris.len(), 200);

        let uri = b.build(&r).uri;
        let token = uri.strip_prefix("/repositories/12345/resources/import_").unwrap();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
