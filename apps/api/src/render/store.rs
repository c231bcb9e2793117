use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;

pub const IMPROVED_RESUME_FILE: &str = "improved_resume.docx";

/// On-disk home of generated resumes: `<root>/<analysis_id>/improved_resume.docx`.
#[derive(Debug, Clone)]
pub struct ImprovedResumeStore {
    root: PathBuf,
}

impl ImprovedResumeStore {
    pub async fn open(root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("Failed to create output dir {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn path_for(&self, analysis_id: Uuid) -> PathBuf {
        self.root
            .join(analysis_id.to_string())
            .join(IMPROVED_RESUME_FILE)
    }

    /// Writes the document atomically so a concurrent download never sees a
    /// half-written file.
    pub async fn save(&self, analysis_id: Uuid, data: Vec<u8>) -> Result<PathBuf, AppError> {
        let path = self.path_for(analysis_id);
        let target = path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&target, &data))
            .await
            .map_err(|e| AppError::Storage(e.to_string()))?
            .map_err(|e| AppError::Storage(format!("{}: {e}", path.display())))?;

        info!("Saved improved resume to {}", path.display());
        Ok(path)
    }

    pub async fn load(&self, analysis_id: Uuid) -> Result<Vec<u8>, AppError> {
        let path = self.path_for(analysis_id);
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(AppError::NotFound(format!(
                "No improved resume for analysis {analysis_id}"
            ))),
            Err(e) => Err(AppError::Storage(format!("{}: {e}", path.display()))),
        }
    }
}

fn write_atomically(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| std::io::Error::new(ErrorKind::InvalidInput, "path has no parent"))?;
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImprovedResumeStore::open(dir.path()).await.unwrap();
        let id = Uuid::new_v4();

        let path = store.save(id, b"docx-bytes".to_vec()).await.unwrap();
        assert!(path.ends_with(format!("{id}/{IMPROVED_RESUME_FILE}")));
        assert_eq!(store.load(id).await.unwrap(), b"docx-bytes");
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImprovedResumeStore::open(dir.path()).await.unwrap();
        let id = Uuid::new_v4();

        store.save(id, b"first".to_vec()).await.unwrap();
        store.save(id, b"second".to_vec()).await.unwrap();
        assert_eq!(store.load(id).await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_load_unknown_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImprovedResumeStore::open(dir.path()).await.unwrap();
        assert!(matches!(
            store.load(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_open_creates_nested_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("a/b/c");
        ImprovedResumeStore::open(&root).await.unwrap();
        assert!(root.is_dir());
    }
}
