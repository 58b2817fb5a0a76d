use crate::exercises::columns::ColumnMap;
use crate::exercises::table::Table;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Coarse exercise category understood by the importer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Cardio,
    Lift,
}

impl ExerciseType {
    /// `cardio` (any case, surrounding whitespace ignored) or else `lift`
    pub fn classify(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("cardio") {
            ExerciseType::Cardio
        } else {
            ExerciseType::Lift
        }
    }
}

/// One exported exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_part: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ExerciseType>,
}

impl Exercise {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Exercise {
            title: name.clone(),
            name,
            body_part: None,
            equipment: None,
            kind: None,
        }
    }
}

/// Map every usable row of `table` to an exercise.
///
/// Rows whose title is missing or blank are skipped.
pub fn exercises_from_table(table: &Table, columns: &ColumnMap) -> Vec<Exercise> {
    let optional = |row: usize, column: Option<usize>| {
        column
            .and_then(|c| table.cell(row, c))
            .map(|v| v.trim().to_string())
    };

    (0..table.len())
        .filter_map(|row| {
            let name = table.cell(row, columns.title)?.trim();
            if name.is_empty() {
                return None;
            }

            let mut exercise = Exercise::new(name);
            exercise.body_part = optional(row, columns.body_part);
            exercise.equipment = optional(row, columns.equipment);
            exercise.kind = columns
                .kind
                .and_then(|c| table.cell(row, c))
                .map(ExerciseType::classify);
            Some(exercise)
        })
        .collect()
}

/// Write `exercises` as a JSON array, 2-space indented unless `compact`
pub fn write_exercises<W: Write>(mut writer: W, exercises: &[Exercise], compact: bool) -> Result<()> {
    let serialized = if compact {
        serde_json::to_writer(&mut writer, exercises)
    } else {
        serde_json::to_writer_pretty(&mut writer, exercises)
    };
    serialized.context("Failed to serialize exercises")?;

    writeln!(writer).context("Failed to write exercises")?;
    writer.flush().context("Failed to flush exercises")
}
