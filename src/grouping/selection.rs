//! Grouping selection and its conflict-resolving transitions.

use crate::aggregator::Field;
use crate::utils::config::{DEFAULT_COLUMN_FIELD, DEFAULT_ROW_FIELD};
use crate::utils::error::GroupingError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Which fields form rows, columns and nested columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingSelection {
    pub row: Field,

    pub column: Field,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_column: Option<Field>,
}

/// A change requested from one of the three selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingAction {
    SetRow(Field),
    SetColumn(Field),
    SetSecondaryColumn(Option<Field>),
}

impl Default for GroupingSelection {
    fn default() -> Self {
        Self {
            row: DEFAULT_ROW_FIELD,
            column: DEFAULT_COLUMN_FIELD,
            secondary_column: None,
        }
    }
}

impl GroupingSelection {
    /// Apply a selector change, resolving conflicts so the fields stay distinct
    ///
    /// **Public** - the only way selections change
    ///
    /// * Row taking the column's field moves the column to the first other
    ///   field and clears the secondary column.
    /// * Row taking the secondary's field clears the secondary column.
    /// * Column equal to row is ignored; column equal to secondary clears it.
    /// * Secondary equal to row or column is ignored.
    pub fn apply(self, action: GroupingAction) -> Self {
        let next = match action {
            GroupingAction::SetRow(row) => {
                if row == self.column {
                    Self {
                        row,
                        column: first_field_except(&[row]).unwrap_or(self.column),
                        secondary_column: None,
                    }
                } else if Some(row) == self.secondary_column {
                    Self {
                        row,
                        secondary_column: None,
                        ..self
                    }
                } else {
                    Self { row, ..self }
                }
            }
            GroupingAction::SetColumn(column) => {
                if column == self.row {
                    self
                } else if Some(column) == self.secondary_column {
                    Self {
                        column,
                        secondary_column: None,
                        ..self
                    }
                } else {
                    Self { column, ..self }
                }
            }
            GroupingAction::SetSecondaryColumn(secondary) => match secondary {
                Some(field) if field == self.row || field == self.column => self,
                _ => Self {
                    secondary_column: secondary,
                    ..self
                },
            },
        };

        if next == self {
            debug!("Grouping unchanged by {:?}", action);
        } else {
            debug!("Grouping changed by {:?}: {}", action, next.describe());
        }

        next
    }

    /// Fields the column selector may offer
    pub fn available_column_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| *field != self.row)
            .collect()
    }

    /// Fields the secondary column selector may offer
    pub fn available_secondary_column_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| *field != self.row && *field != self.column)
            .collect()
    }

    /// Fields the row selector may offer
    pub fn row_fields(&self) -> Vec<Field> {
        Field::ALL.to_vec()
    }

    pub fn is_distinct(&self) -> bool {
        self.row != self.column
            && self
                .secondary_column
                .map_or(true, |secondary| secondary != self.row && secondary != self.column)
    }

    /// Encode as `row=..&column=..[&secondary_column=..]`
    pub fn to_query(&self) -> Result<String, GroupingError> {
        Ok(serde_urlencoded::to_string(self)?)
    }

    /// Restore a selection previously produced by [`to_query`](Self::to_query)
    ///
    /// # Errors
    /// * `GroupingError::InvalidQuery` - missing or unknown field names
    /// * `GroupingError::Conflict` - fields are not pairwise distinct
    pub fn from_query(query: &str) -> Result<Self, GroupingError> {
        let query = query.trim_start_matches('?');
        let selection: Self = serde_urlencoded::from_str(query)?;

        if !selection.is_distinct() {
            return Err(GroupingError::Conflict(selection.describe()));
        }

        Ok(selection)
    }

    /// Human-readable summary for logs
    pub fn describe(&self) -> String {
        match self.secondary_column {
            Some(secondary) => format!(
                "rows by {}, columns by {} then {}",
                self.row, self.column, secondary
            ),
            None => format!("rows by {}, columns by {}", self.row, self.column),
        }
    }
}

/// **Private** - first field in selector order not in `taken`
fn first_field_except(taken: &[Field]) -> Option<Field> {
    Field::ALL.into_iter().find(|field| !taken.contains(field))
}
