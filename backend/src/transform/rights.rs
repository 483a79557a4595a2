//! Donor rights statement built from the condition columns.

use chrono::NaiveDate;

use super::row::{Column, FieldRow};
use crate::models::{OtherRightsBasis, RightsNote, RightsNoteType, RightsStatement, RightsType};

/// Condition columns and their labels, in note order.
pub const RIGHTS_CONDITIONS: [(Column, &str); 3] = [
    (Column::AccessConditions, "Access Conditions (eg Available for Reference. Not for Loan)"),
    (Column::UseConditions, "Use Conditions (eg copying not permitted)"),
    (Column::GrantedNote, "Granted Notes"),
];

/// Build the row's rights statement, starting on `start_date`.
///
/// Always returns a statement; its notes hold only the conditions present.
pub fn build(row: &FieldRow, start_date: NaiveDate) -> RightsStatement {
    let notes = RIGHTS_CONDITIONS
        .iter()
        .filter_map(|(column, label)| {
            row.get(*column).map(|text| RightsNote {
                label: (*label).to_string(),
                note_type: RightsNoteType::AdditionalInformation,
                content: vec![text.to_string()],
            })
        })
        .collect();

    RightsStatement {
        rights_type: RightsType::Other,
        other_rights_basis: OtherRightsBasis::Donor,
        start_date,
        notes,
    }
}
