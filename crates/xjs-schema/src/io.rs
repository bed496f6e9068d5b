use crate::Result;
use crate::schema::StatusDocument;
use std::path::Path;

/// Encoding of a saved status report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files and anything that opens with `{` are JSON, the rest YAML
    pub fn detect(path: Option<&Path>, text: &str) -> Self {
        let by_extension = path
            .and_then(|p| p.extension())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if by_extension || text.trim_start().starts_with('{') {
            DocumentFormat::Json
        } else {
            DocumentFormat::Yaml
        }
    }
}

/// Read and parse a status report from disk
pub fn load_document(path: &Path) -> Result<StatusDocument> {
    let text = std::fs::read_to_string(path)?;
    let format = DocumentFormat::detect(Some(path), &text);
    tracing::debug!(path = %path.display(), ?format, "loading status document");
    parse_document(&text, format)
}

pub fn parse_document(text: &str, format: DocumentFormat) -> Result<StatusDocument> {
    let doc = match format {
        DocumentFormat::Json => serde_json::from_str(text)?,
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(doc)
}
