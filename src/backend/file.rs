use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::{BackendError, StorageBackend};

/// File-per-key backend: each key is stored as `<key>.json` under a data
/// directory. Writes land in a `.tmp` sibling first and are renamed into
/// place, so an interrupted write never truncates the previous value.
pub struct FileBackend {
    base_dir: PathBuf,
}

impl FileBackend {
    /// Open (creating if needed) a backend rooted at `base_dir`.
    pub async fn new(base_dir: impl AsRef<Path>) -> Result<Self, BackendError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).await?;
        Ok(Self { base_dir })
    }

    fn key_path(&self, key: &str) -> Result<PathBuf, BackendError> {
        validate_key(key)?;
        Ok(self.base_dir.join(format!("{key}.json")))
    }
}

/// Keys double as file names. Reject anything that could escape the data
/// directory.
fn validate_key(key: &str) -> Result<(), BackendError> {
    if key.is_empty()
        || key.contains('/')
        || key.contains('\\')
        || key.contains("..")
        || key.chars().any(|c| c.is_control())
    {
        return Err(BackendError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[async_trait]
impl StorageBackend for FileBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
        let path = self.key_path(key)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;
        debug!(key = %key, bytes = value.len(), "persisted value");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), BackendError> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), BackendError> {
        for key in keys {
            self.remove(key).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn round_trips_values_through_disk() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path()).await.unwrap();

        assert_eq!(backend.get("travelr:trips").await.unwrap(), None);
        backend.set("travelr:trips", "[]").await.unwrap();
        assert_eq!(
            backend.get("travelr:trips").await.unwrap().as_deref(),
            Some("[]")
        );

        backend.remove("travelr:trips").await.unwrap();
        assert_eq!(backend.get("travelr:trips").await.unwrap(), None);
    }

    #[tokio::test]
    async fn overwrites_replace_the_previous_value() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path()).await.unwrap();

        backend.set("k", "first").await.unwrap();
        backend.set("k", "second").await.unwrap();
        assert_eq!(backend.get("k").await.unwrap().as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn removing_an_absent_key_is_ok() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path()).await.unwrap();
        backend.remove("never-written").await.unwrap();
    }

    #[tokio::test]
    async fn remove_many_clears_all_named_keys() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path()).await.unwrap();

        backend.set("travelr:user", "{}").await.unwrap();
        backend.set("travelr:trips", "[]").await.unwrap();
        backend.set("travelr:posts", "[]").await.unwrap();

        backend
            .remove_many(&["travelr:user", "travelr:trips", "never-written"])
            .await
            .unwrap();

        assert_eq!(backend.get("travelr:user").await.unwrap(), None);
        assert_eq!(backend.get("travelr:trips").await.unwrap(), None);
        assert_eq!(
            backend.get("travelr:posts").await.unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn rejects_path_traversal_keys() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path()).await.unwrap();
        let err = backend.get("../outside").await.unwrap_err();
        assert!(matches!(err, BackendError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn survives_reopening_the_directory() {
        let dir = TempDir::new().unwrap();
        {
            let backend = FileBackend::new(dir.path()).await.unwrap();
            backend.set("travelr:user", "{\"id\":\"u1\"}").await.unwrap();
        }
        let reopened = FileBackend::new(dir.path()).await.unwrap();
        assert_eq!(
            reopened.get("travelr:user").await.unwrap().as_deref(),
            Some("{\"id\":\"u1\"}")
        );
    }
}
