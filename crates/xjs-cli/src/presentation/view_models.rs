use crate::types::Section;
use serde::Serialize;
use xjs_types::Tone;

/// One table cell: display text and, when it is semantically colored, its tone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellViewModel {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
}

impl CellViewModel {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone: Some(tone),
        }
    }

    pub fn empty() -> Self {
        Self::plain("")
    }
}

impl From<&str> for CellViewModel {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for CellViewModel {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

pub type RowViewModel = Vec<CellViewModel>;

#[derive(Debug, Clone, Serialize)]
pub struct TableViewModel {
    pub section: Section,
    pub columns: Vec<String>,
    pub rows: Vec<RowViewModel>,
}

impl TableViewModel {
    pub fn new(section: Section, columns: &[&str]) -> Self {
        Self {
            section,
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Plain text of every row, for assertions and logs
    pub fn plain_rows(&self) -> Vec<Vec<&str>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.text.as_str()).collect())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusViewModel {
    /// Printed (highlighted) above the tables
    pub warnings: Vec<String>,
    pub tables: Vec<TableViewModel>,
}
