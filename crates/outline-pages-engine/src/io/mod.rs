use crate::render::{PageSink, RenderError, Template};
use relative_path::RelativePath;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid output directory: {0}")]
    InvalidOutputDir(String),
}

/// Read an outline or template file as UTF-8
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Load a page template from disk
pub fn read_template(path: &Path) -> Result<Template, IoError> {
    read_file(path).map(Template::new)
}

/// Delete `dir` if it exists and create it again, empty.
///
/// Refuses to touch a path that exists but is not a directory.
pub fn reset_output_dir(dir: &Path) -> Result<(), IoError> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(IoError::InvalidOutputDir(format!(
                "{} exists and is not a directory",
                dir.display()
            )));
        }
        fs::remove_dir_all(dir).map_err(IoError::Io)?;
    }
    fs::create_dir_all(dir).map_err(IoError::Io)
}

/// Writes pages as flat files inside one directory.
#[derive(Debug)]
pub struct OutputDir {
    root: PathBuf,
}

impl OutputDir {
    /// Opens an existing directory for writing pages.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, IoError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(IoError::InvalidOutputDir(format!(
                "{} is not a directory",
                root.display()
            )));
        }
        Ok(Self { root })
    }
}

impl PageSink for OutputDir {
    /// Creates the page file; an existing file is never overwritten.
    fn write_page(&mut self, name: &RelativePath, html: &str) -> Result<(), RenderError> {
        let path = name.to_path(&self.root);
        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                return Err(RenderError::PageExists(path));
            }
            Err(e) => return Err(IoError::Io(e).into()),
        };
        file.write_all(html.as_bytes()).map_err(IoError::Io)?;
        Ok(())
    }
}
