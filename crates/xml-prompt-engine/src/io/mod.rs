use std::fs;
use std::path::{Path, PathBuf};

use crate::models::ContentNode;
use crate::parsing::parse_markdown;
use crate::xml::render_to_xml;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a text file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Read a markdown file into a forest
pub fn load_markdown(path: &Path) -> Result<Vec<ContentNode>, IoError> {
    let text = read_file(path)?;
    log::info!("parsing {} ({} bytes)", path.display(), text.len());
    Ok(parse_markdown(&text))
}

/// Serialize a forest and write it as an XML fragment
pub fn save_xml(path: &Path, forest: &[ContentNode]) -> Result<(), IoError> {
    write_file(path, &render_to_xml(forest))
}
