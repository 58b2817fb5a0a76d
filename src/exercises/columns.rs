//! Picks which dataset column feeds each exported key.
//!
//! Datasets disagree on naming ("Title" vs "name", "BodyPart" vs "body_part"
//! vs "target"), so every key has a list of candidate names compared after
//! trimming and lowercasing. The first candidate present wins.

use anyhow::{bail, Result};
use std::collections::HashMap;

pub const TITLE_CANDIDATES: &[&str] = &["title", "name"];
pub const BODY_PART_CANDIDATES: &[&str] = &["bodypart", "body_part", "target"];
pub const EQUIPMENT_CANDIDATES: &[&str] = &["equipment"];
pub const TYPE_CANDIDATES: &[&str] = &["type", "category"];

/// Resolved column indices for one table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub title: usize,
    pub body_part: Option<usize>,
    pub equipment: Option<usize>,
    pub kind: Option<usize>,
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

impl ColumnMap {
    /// Resolve against `columns`. The title falls back to the first column.
    pub fn resolve<S: AsRef<str>>(columns: &[S]) -> Result<Self> {
        if columns.is_empty() {
            bail!("Dataset has no columns");
        }

        // later duplicates overwrite earlier ones after normalization
        let index: HashMap<String, usize> = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (normalize(c.as_ref()), i))
            .collect();

        let lookup = |candidates: &[&str]| candidates.iter().find_map(|c| index.get(*c).copied());

        Ok(ColumnMap {
            title: lookup(TITLE_CANDIDATES).unwrap_or(0),
            body_part: lookup(BODY_PART_CANDIDATES),
            equipment: lookup(EQUIPMENT_CANDIDATES),
            kind: lookup(TYPE_CANDIDATES),
        })
    }
}
