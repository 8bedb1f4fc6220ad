use super::backend::StorageBackend;
use crate::error::{NotesError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed storage: every key is a file of the same name under `root`.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write never leaves a truncated record behind.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(NotesError::Io)?;
        }
        Ok(())
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\'])
            && !key.starts_with('.');
        if !valid {
            return Err(NotesError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(key))
    }
}

impl StorageBackend for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(NotesError::Io)?;
        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;

        let tmp_file = self
            .root
            .join(format!(".{}-{}.tmp", key, std::process::id()));
        fs::write(&tmp_file, value).map_err(NotesError::Io)?;
        fs::rename(&tmp_file, &path).map_err(NotesError::Io)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key)?;
        if path.exists() {
            fs::remove_file(path).map_err(NotesError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path().join("data"));
        assert_eq!(backend.get("quick-notes__v1").unwrap(), None);
    }

    #[test]
    fn set_creates_root_and_leaves_no_tmp_files() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("data");
        let backend = FsBackend::new(&root);

        backend.set("quick-notes__v1", "[]").unwrap();
        assert_eq!(
            fs::read_to_string(root.join("quick-notes__v1")).unwrap(),
            "[]"
        );

        for entry in fs::read_dir(&root).unwrap() {
            let name = entry.unwrap().file_name();
            let name = name.to_string_lossy();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path());
        backend.set("sel", "abc").unwrap();
        backend.remove("sel").unwrap();
        backend.remove("sel").unwrap();
        assert_eq!(backend.get("sel").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = TempDir::new().unwrap();
        let backend = FsBackend::new(dir.path());
        assert!(backend.set("../escape", "x").is_err());
        assert!(backend.get("").is_err());
        assert!(backend.remove(".hidden").is_err());
    }
}
