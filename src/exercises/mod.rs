//! Gym exercise dataset export
//!
//! Turns a tabular exercise dataset into the JSON array accepted by the
//! exercise importer: `name`, `title` and optionally `bodyPart`,
//! `equipment` and `type` (`"cardio"` or `"lift"`).

pub mod columns;
pub mod export;
pub mod table;

pub use columns::ColumnMap;
pub use export::{exercises_from_table, write_exercises, Exercise, ExerciseType};
pub use table::{CsvDatasetSource, DatasetSource, Table};
