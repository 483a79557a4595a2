//! Row parsing: raw positional cells to named fields.
//!
//! A collection sheet has a fixed column order. [`Column::ALL`] is that
//! order, and [`parse_row`] zips a raw row against it, trimming cells and
//! dropping rows that do not describe a collection.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One line of the sheet, one entry per cell, position-significant.
pub type RawRow = Vec<Option<String>>;

/// Title cell text of a spreadsheet's own header row.
pub const PLACEHOLDER_TITLE: &str = "Title";

/// Marker found in the title cell of exported template header rows.
pub const HEADER_MARKER: &str = "resources_basicinformation_title";

macro_rules! columns {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A named column of the collection sheet.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Column {
            $($variant),+
        }

        impl Column {
            /// Every column, in sheet order.
            pub const ALL: &'static [Column] = &[$(Column::$variant),+];

            /// Field name used in the sheet schema.
            pub fn name(self) -> &'static str {
                match self {
                    $(Column::$variant => $name),+
                }
            }
        }
    };
}

columns! {
    Title => "title",
    ResourceId => "resource_id",
    AccessConditions => "access_conditions",
    UseConditions => "use_conditions",
    GrantedNote => "granted_note",
    ProcessingNote1 => "processing_note_1",
    ProcessingNote2 => "processing_note_2",
    DateExpression => "date_expression",
    DateBegin => "date_begin",
    DateEnd => "date_end",
    ExtentContainerSummary => "extent_container_summary",
    ExtentNumber => "extent_number",
    ExtentType => "extent_type",
    LangMaterials => "lang_materials",
    ScriptMaterials => "script_materials",
    FindingAidLanguage => "finding_aid_language",
    FindingAidScript => "finding_aid_script",
    NoteConditionsGoverningAccess => "note_conditions_governing_access",
    NoteImmediateSourceOfAcquisition => "note_immediate_source_of_acquisition",
    NoteArrangement => "note_arrangement",
    NoteBiographicalHistorical => "note_biographical_historical",
    NoteCustodialHistory => "note_custodial_history",
    NoteGeneralSubjects => "note_general_subjects",
    NoteGeneralArchivalHistory => "note_general_archival_history",
    NoteGeneralFaNotes => "note_general_fa_notes",
    NotePhysicalDescription => "note_physical_description",
    NotePreferredCitation => "note_preferred_citation",
    NoteRelatedMaterials => "note_related_materials",
    NoteScopeAndContent => "note_scope_and_content",
    NoteSeparatedMaterials => "note_separated_materials",
    NoteConditionsGoverningUse => "note_conditions_governing_use",
    NoteBibliography => "note_bibliography",
    NoteExistenceAndLocationOfCopies => "note_existence_and_location_of_copies",
    NoteExistenceAndLocationOfOriginals => "note_existence_and_location_of_originals",
    NoteOtherFindingAids => "note_other_finding_aids",
}

/// Number of columns in the sheet schema.
pub const COLUMN_COUNT: usize = Column::ALL.len();

impl Column {
    /// Position of this column in a raw row.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Why a row produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Every cell empty after trimming.
    Blank,
    /// No title cell.
    MissingTitle,
    /// Title is the literal column heading.
    PlaceholderTitle,
    /// Title carries the template header marker.
    HeaderMarker,
}

impl SkipReason {
    pub fn describe(self) -> &'static str {
        match self {
            SkipReason::Blank => "blank row",
            SkipReason::MissingTitle => "missing title",
            SkipReason::PlaceholderTitle => "header row",
            SkipReason::HeaderMarker => "template header row",
        }
    }
}

/// A sheet row with named, trimmed fields and a usable title.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRow {
    values: Vec<Option<String>>,
}

impl FieldRow {
    /// Build a row from named values, through the same rules as [`parse_row`].
    pub fn from_fields<'a, I>(fields: I) -> Result<Self, SkipReason>
    where
        I: IntoIterator<Item = (Column, &'a str)>,
    {
        let mut raw: RawRow = vec![None; COLUMN_COUNT];
        for (column, value) in fields {
            raw[column.index()] = Some(value.to_string());
        }
        parse_row(&raw)
    }

    /// Trimmed value of a field, `None` when absent.
    pub fn get(&self, column: Column) -> Option<&str> {
        self.values[column.index()].as_deref()
    }

    pub fn title(&self) -> &str {
        // parse_row rejects rows without a title
        self.get(Column::Title).unwrap_or_default()
    }
}

impl Serialize for FieldRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.values.iter().filter(|v| v.is_some()).count();
        let mut map = serializer.serialize_map(Some(present))?;
        for column in Column::ALL {
            if let Some(value) = self.get(*column) {
                map.serialize_entry(column.name(), value)?;
            }
        }
        map.end()
    }
}

/// Trim a cell, treating whitespace-only content as absent.
fn clean_cell(cell: Option<&String>) -> Option<String> {
    cell.map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

/// Zip a raw row against [`Column::ALL`].
///
/// Cells past the last column are dropped and missing cells are absent.
/// Rows that are blank or whose title is missing, the column heading, or a
/// template header marker are rejected with the reason.
pub fn parse_row(raw: &[Option<String>]) -> Result<FieldRow, SkipReason> {
    if raw.iter().all(|cell| clean_cell(cell.as_ref()).is_none()) {
        return Err(SkipReason::Blank);
    }

    let values: Vec<Option<String>> = (0..COLUMN_COUNT)
        .map(|i| clean_cell(raw.get(i).and_then(Option::as_ref)))
        .collect();

    match values[Column::Title.index()].as_deref() {
        None => Err(SkipReason::MissingTitle),
        Some(PLACEHOLDER_TITLE) => Err(SkipReason::PlaceholderTitle),
        Some(title) if title.contains(HEADER_MARKER) => Err(SkipReason::HeaderMarker),
        Some(_) => Ok(FieldRow { values }),
    }
}
