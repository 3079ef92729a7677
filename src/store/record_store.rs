//! Whole-document JSON persistence.
//!
//! Every read parses a file in full and every write replaces it in full.
//! Nothing is cached between operations.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

use crate::errors::AppError;
use crate::models::{AdminProfile, ClassRoster, TeacherRoster};

/// The three documents that make up a data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Admin,
    Classes,
    Teachers,
}

impl Document {
    pub fn file_name(&self) -> &'static str {
        match self {
            Document::Admin => "admin_id.json",
            Document::Classes => "classes.json",
            Document::Teachers => "teachers.json",
        }
    }
}

/// File-backed store rooted at a data directory.
#[derive(Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl RecordStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self, document: Document) -> PathBuf {
        self.data_dir.join(document.file_name())
    }

    /// Serialize read-modify-write cycles within this process.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Parse a document, returning `None` when the file does not exist.
    pub async fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, AppError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            tracing::error!("Corrupt data file {}: {}", path.display(), e);
            AppError::CorruptData(format!("Error reading {}: {}", file_label(path), e))
        })
    }

    /// Parse a document, substituting `T::default()` when the file does not exist.
    pub async fn load_or_default<T: DeserializeOwned + Default>(
        &self,
        path: &Path,
    ) -> Result<T, AppError> {
        Ok(self.load(path).await?.unwrap_or_default())
    }

    /// Replace a document in full with an indented rendering of `document`.
    ///
    /// The payload goes to a sibling temp file first and is renamed over the
    /// target, so readers never observe a half-written file.
    pub async fn save<T: Serialize>(&self, path: &Path, document: &T) -> Result<(), AppError> {
        let payload = to_indented_json(document)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, payload).await?;
        if let Err(e) = tokio::fs::rename(&temp_path, path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
                tracing::warn!("Could not remove {}: {}", temp_path.display(), cleanup);
            }
            return Err(e.into());
        }

        tracing::debug!("Saved {}", path.display());
        Ok(())
    }

    /// The admin profile has no sensible default, so a missing file is an error.
    pub async fn load_admin(&self) -> Result<AdminProfile, AppError> {
        let path = self.path(Document::Admin);
        self.load(&path).await?.ok_or_else(|| {
            tracing::warn!("Admin profile missing at {}", path.display());
            AppError::MissingFile(format!("{} does not exist", Document::Admin.file_name()))
        })
    }

    pub async fn save_admin(&self, profile: &AdminProfile) -> Result<(), AppError> {
        self.save(&self.path(Document::Admin), profile).await
    }

    pub async fn load_classes(&self) -> Result<ClassRoster, AppError> {
        self.load_or_default(&self.path(Document::Classes)).await
    }

    pub async fn save_classes(&self, roster: &ClassRoster) -> Result<(), AppError> {
        self.save(&self.path(Document::Classes), roster).await
    }

    pub async fn load_teachers(&self) -> Result<TeacherRoster, AppError> {
        self.load_or_default(&self.path(Document::Teachers)).await
    }

    pub async fn save_teachers(&self, roster: &TeacherRoster) -> Result<(), AppError> {
        self.save(&self.path(Document::Teachers), roster).await
    }
}

/// Four-space indentation, matching files written by earlier releases.
fn to_indented_json<T: Serialize>(document: &T) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document
        .serialize(&mut ser)
        .map_err(|e| AppError::Internal(format!("Failed to serialize document: {}", e)))?;
    Ok(buf)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
