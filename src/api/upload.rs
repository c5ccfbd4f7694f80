use crate::error::AppError;
use quoted_printable::ParseMode;
use std::path::Path;

/// Saved match-history page formats the submit command understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchFileKind {
    Html,
    /// MIME archive (`.mht`/`.mhtml`) with a quoted-printable body.
    Mht,
}

impl MatchFileKind {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "html" | "htm" => Ok(MatchFileKind::Html),
            "mht" | "mhtml" => Ok(MatchFileKind::Mht),
            _ => Err(AppError::InvalidInput(format!(
                "wrong file extension '.{}' (must be .html, .htm, .mht or .mhtml)",
                ext
            ))),
        }
    }
}

/// Turns the saved file into the page text the server parses. Both formats
/// are latin-1 once decoded.
pub fn decode_match_file(kind: MatchFileKind, bytes: &[u8]) -> Result<String, AppError> {
    let raw = match kind {
        MatchFileKind::Html => bytes.to_vec(),
        MatchFileKind::Mht => quoted_printable::decode(bytes, ParseMode::Robust)
            .map_err(|e| AppError::InvalidInput(format!("bad quoted-printable data: {}", e)))?,
    };
    Ok(latin1(&raw))
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
