//! Vault file access: listing note identifiers, reading notes, creating notes.

use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::domain::{NoteName, ParseNoteNameError, VaultIds};

/// Errors during file system operations on a vault.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("not found: {path}")]
    NotFound { path: PathBuf },

    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("invalid encoding in {path}: {encoding}")]
    InvalidEncoding { path: PathBuf, encoding: String },

    #[error("note already exists: {path}")]
    AlreadyExists { path: PathBuf },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    InvalidName(#[from] ParseNoteNameError),
}

impl VaultError {
    /// Creates an appropriate VaultError from an io::Error.
    fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => VaultError::NotFound { path: path.into() },
            io::ErrorKind::PermissionDenied => VaultError::PermissionDenied { path: path.into() },
            _ => VaultError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Scans a vault recursively for markdown (.md) files.
///
/// Skips hidden files and directories (starting with `.`), such as
/// `.obsidian/` and `.trash/`. Returns paths relative to the vault root.
///
/// # Errors
///
/// Returns `VaultError::NotFound` if the directory doesn't exist.
/// Returns `VaultError::NotADirectory` if the path is not a directory.
pub fn scan_vault(dir: &Path) -> Result<impl Iterator<Item = PathBuf>, VaultError> {
    if !dir.exists() {
        return Err(VaultError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(VaultError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let dir_owned = dir.to_path_buf();
    let iter = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(has_md_extension)
        .filter_map(move |e| e.path().strip_prefix(&dir_owned).ok().map(Path::to_path_buf));

    Ok(iter)
}

/// Lists the identifiers of every note in the vault.
///
/// An identifier is the note's file name without `.md`, regardless of which
/// subdirectory it lives in.
pub fn list_note_ids(dir: &Path) -> Result<VaultIds, VaultError> {
    let ids: VaultIds = scan_vault(dir)?
        .filter_map(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
        })
        .collect();
    debug!(vault = %dir.display(), count = ids.len(), "listed note identifiers");
    Ok(ids)
}

/// Reads a note file as UTF-8 text.
///
/// # Errors
///
/// Returns `VaultError::NotFound` if the file doesn't exist.
/// Returns `VaultError::InvalidEncoding` for UTF-16 files and invalid UTF-8.
pub fn read_note_text(path: &Path) -> Result<String, VaultError> {
    let bytes = std::fs::read(path).map_err(|e| VaultError::from_io(path, e))?;
    decode_note_bytes(bytes, path)
}

/// Decodes raw note bytes, stripping a UTF-8 byte order mark.
pub fn decode_note_bytes(bytes: Vec<u8>, path: &Path) -> Result<String, VaultError> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(VaultError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 LE detected (byte order mark FF FE); convert to UTF-8".into(),
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(VaultError::InvalidEncoding {
            path: path.into(),
            encoding: "UTF-16 BE detected (byte order mark FE FF); convert to UTF-8".into(),
        });
    }

    let content = String::from_utf8(bytes).map_err(|e| VaultError::InvalidEncoding {
        path: path.into(),
        encoding: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
    })?;

    Ok(match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// Returns the path of the note named `name` at the vault root.
pub fn note_path(dir: &Path, name: &NoteName) -> PathBuf {
    dir.join(name.file_name())
}

/// Reads the note named `name` from the vault root.
pub fn read_note(dir: &Path, name: &str) -> Result<String, VaultError> {
    let name = NoteName::new(name)?;
    read_note_text(&note_path(dir, &name))
}

/// Creates a new note at the vault root.
///
/// The write is atomic: content goes to a temporary file in the vault that
/// is then persisted into place, failing if the note already exists.
///
/// # Errors
///
/// Returns `VaultError::InvalidName` if `name` is not a valid note name.
/// Returns `VaultError::AlreadyExists` if a note with that name exists.
/// Returns `VaultError::NotFound` if the vault directory doesn't exist.
pub fn create_note(dir: &Path, name: &str, content: &str) -> Result<PathBuf, VaultError> {
    let name = NoteName::new(name)?;
    if !dir.is_dir() {
        return Err(VaultError::NotFound { path: dir.into() });
    }

    let path = note_path(dir, &name);
    if path.exists() {
        return Err(VaultError::AlreadyExists { path });
    }

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| VaultError::Io {
        path: path.clone(),
        source: e,
    })?;

    temp.write_all(content.as_bytes())
        .map_err(|e| VaultError::Io {
            path: path.clone(),
            source: e,
        })?;

    temp.persist_noclobber(&path).map_err(|e| {
        if e.error.kind() == io::ErrorKind::AlreadyExists {
            VaultError::AlreadyExists { path: path.clone() }
        } else {
            VaultError::AtomicWrite {
                path: path.clone(),
                source: e.error,
            }
        }
    })?;

    debug!(path = %path.display(), bytes = content.len(), "created note");
    Ok(path)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn has_md_extension(entry: &DirEntry) -> bool {
    entry.path().extension().is_some_and(|e| e == "md")
}
