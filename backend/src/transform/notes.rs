//! Descriptive notes from the `note_*` columns.
//!
//! [`NOTE_SPECS`] maps each note column to the note it produces. Its order is
//! the order notes appear on the record.

use super::row::{Column, FieldRow};
use crate::models::{Note, NoteKind};

/// How one sheet column becomes a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteSpec {
    pub column: Column,
    pub kind: NoteKind,
    pub note_type: &'static str,
    pub label: Option<&'static str>,
}

const fn spec(column: Column, kind: NoteKind, note_type: &'static str, label: Option<&'static str>) -> NoteSpec {
    NoteSpec { column, kind, note_type, label }
}

/// Note columns in output order.
pub const NOTE_SPECS: [NoteSpec; 18] = [
    spec(Column::NoteConditionsGoverningAccess, NoteKind::Multipart, "accessrestrict", None),
    spec(Column::NoteImmediateSourceOfAcquisition, NoteKind::Multipart, "acqinfo", None),
    spec(Column::NoteArrangement, NoteKind::Multipart, "arrangement", None),
    spec(Column::NoteBiographicalHistorical, NoteKind::Multipart, "bioghist", None),
    spec(Column::NoteCustodialHistory, NoteKind::Multipart, "custodhist", None),
    spec(Column::NoteGeneralSubjects, NoteKind::Multipart, "odd", Some("Subjects")),
    spec(Column::NoteGeneralArchivalHistory, NoteKind::Multipart, "odd", Some("Archival History")),
    spec(Column::NoteGeneralFaNotes, NoteKind::Multipart, "odd", Some("Finding-aid Notes")),
    spec(Column::NotePhysicalDescription, NoteKind::Singlepart, "physdesc", None),
    spec(Column::NotePreferredCitation, NoteKind::Multipart, "prefercite", None),
    spec(Column::NoteRelatedMaterials, NoteKind::Multipart, "relatedmaterial", None),
    spec(Column::NoteScopeAndContent, NoteKind::Multipart, "scopecontent", None),
    spec(Column::NoteSeparatedMaterials, NoteKind::Multipart, "separatedmaterial", None),
    spec(Column::NoteConditionsGoverningUse, NoteKind::Multipart, "userestrict", None),
    spec(Column::NoteBibliography, NoteKind::Bibliography, "bibliography", None),
    spec(Column::NoteExistenceAndLocationOfCopies, NoteKind::Multipart, "altformavail", None),
    spec(Column::NoteExistenceAndLocationOfOriginals, NoteKind::Multipart, "originalsloc", None),
    spec(Column::NoteOtherFindingAids, NoteKind::Multipart, "otherfindaid", None),
];

/// One note per populated column in `table`, in table order.
pub fn compose(row: &FieldRow, table: &[NoteSpec]) -> Vec<Note> {
    table
        .iter()
        .filter_map(|spec| {
            row.get(spec.column)
                .map(|text| Note::new(spec.kind, spec.note_type, spec.label, text))
        })
        .collect()
}
