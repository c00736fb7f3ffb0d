//! Grid placement engine: buckets assignments into a week × weekday matrix
//! for display.
//!
//! Never fails. Assignments with no day information land in the first column
//! of their week row rather than being dropped; multi-day assignments appear
//! once per listed day.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::syllabus::models::{Assignment, DayCode};

/// Columns rendered when no assignment yields any weekday at all. Avoids an
/// empty grid for a batch of week-only items.
pub const FALLBACK_COLUMNS: [DayCode; 3] = [DayCode::M, DayCode::W, DayCode::F];

/// Week row used for assignments with no week number.
pub const UNSCHEDULED_WEEK: u32 = 0;

/// One populated `(week, weekday)` bucket. Items keep source order.
#[derive(Debug, Clone, Serialize)]
pub struct GridCell {
    pub week: u32,
    pub day: DayCode,
    pub items: Vec<Assignment>,
}

/// The display matrix: the weekday columns actually used (fixed M..Su
/// order), the week rows ascending (`0` = no week known), and the populated
/// cells ordered by `(week, column)`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Matrix {
    pub columns: Vec<DayCode>,
    pub rows: Vec<u32>,
    pub cells: Vec<GridCell>,
}

impl Matrix {
    pub fn cell(&self, week: u32, day: DayCode) -> Option<&GridCell> {
        self.cells.iter().find(|c| c.week == week && c.day == day)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Organizes assignments into the matrix.
///
/// Day set per assignment: explicit `days` verbatim, else the weekday of
/// `dueDate`, else empty (first-column fallback). Empty input yields an
/// empty matrix.
pub fn place(assignments: &[Assignment]) -> Matrix {
    if assignments.is_empty() {
        return Matrix::default();
    }

    let day_sets: Vec<Vec<DayCode>> = assignments.iter().map(effective_days).collect();

    // BTreeSet iterates in DayCode's column order.
    let used_days: BTreeSet<DayCode> = day_sets.iter().flatten().copied().collect();
    let columns: Vec<DayCode> = if used_days.is_empty() {
        FALLBACK_COLUMNS.to_vec()
    } else {
        used_days.into_iter().collect()
    };

    let rows: BTreeSet<u32> = assignments
        .iter()
        .map(|a| a.week.unwrap_or(UNSCHEDULED_WEEK))
        .collect();

    let mut cells: BTreeMap<(u32, DayCode), Vec<Assignment>> = BTreeMap::new();
    for (assignment, days) in assignments.iter().zip(&day_sets) {
        let week = assignment.week.unwrap_or(UNSCHEDULED_WEEK);
        if days.is_empty() {
            // No day information at all: first column, so nothing vanishes
            // from the visual grid.
            cells
                .entry((week, columns[0]))
                .or_default()
                .push(assignment.clone());
        } else {
            for day in days {
                cells
                    .entry((week, *day))
                    .or_default()
                    .push(assignment.clone());
            }
        }
    }

    Matrix {
        columns,
        rows: rows.into_iter().collect(),
        cells: cells
            .into_iter()
            .map(|((week, day), items)| GridCell { week, day, items })
            .collect(),
    }
}

/// Derives the weekday set an assignment occupies: explicit `days` win, then
/// the calendar weekday of `dueDate`, then nothing.
fn effective_days(assignment: &Assignment) -> Vec<DayCode> {
    if let Some(days) = &assignment.days {
        if !days.is_empty() {
            return days.clone();
        }
    }
    assignment.due_weekday().map(|d| vec![d]).unwrap_or_default()
}
