//! Source entries discovered in a category directory.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Split an entry name into base name and extension.
///
/// Leading dots belong to the base name and the extension starts at the last
/// remaining dot, so `base + ext` always reconstructs `name`. Works on the raw
/// encoded bytes, so names that are not valid UTF-8 keep their exact bytes.
pub fn split_name(name: &OsStr) -> (&OsStr, &OsStr) {
    let bytes = name.as_encoded_bytes();
    let leading = bytes.iter().take_while(|&&b| b == b'.').count();
    let Some(idx) = bytes[leading..].iter().rposition(|&b| b == b'.') else {
        return (name, OsStr::new(""));
    };
    let (base, ext) = bytes.split_at(leading + idx);
    // SAFETY: both halves come from `as_encoded_bytes` on the same string and
    // the split point sits immediately before an ASCII '.', which std documents
    // as a valid boundary for `from_encoded_bytes_unchecked`.
    unsafe {
        (
            OsStr::from_encoded_bytes_unchecked(base),
            OsStr::from_encoded_bytes_unchecked(ext),
        )
    }
}

/// A single entry of the source directory, treated as one test program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    file_name: OsString,
}

impl SourceFile {
    /// Build a source file from a directory entry path.
    ///
    /// Returns `None` for paths without a final component (e.g. `..`).
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let file_name = path.file_name()?.to_os_string();
        Some(Self { path, file_name })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entry name as listed, including extension.
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// Entry name for progress output and reports.
    pub fn display_name(&self) -> Cow<'_, str> {
        self.file_name.to_string_lossy()
    }

    pub fn base_name(&self) -> &OsStr {
        split_name(&self.file_name).0
    }
}
