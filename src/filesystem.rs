//! Directory and file operations on already-resolved paths.
//!
//! Absence is reported through `Option`/`bool` so callers decide how to
//! surface it; every other failure is returned as the underlying I/O error.

use std::io;
use std::path::Path;

pub async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}

pub async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

/// Names of the entries in a directory, in filesystem order
///
/// Returns `Ok(None)` if `path` is not an existing directory.
pub async fn list_dir(path: &Path) -> io::Result<Option<Vec<String>>> {
    if !is_dir(path).await {
        return Ok(None);
    }

    let mut entries = tokio::fs::read_dir(path).await?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(Some(names))
}

/// Create a directory and any missing parents. Succeeds if it already exists.
pub async fn create_dir(path: &Path) -> io::Result<()> {
    tokio::fs::create_dir_all(path).await
}

/// Remove an empty directory
///
/// Returns `Ok(false)` if `path` is not a directory. A non-empty directory is
/// an error.
pub async fn delete_dir(path: &Path) -> io::Result<bool> {
    if !is_dir(path).await {
        return Ok(false);
    }
    tokio::fs::remove_dir(path).await?;
    Ok(true)
}

/// Move a directory. Returns `Ok(false)` if `from` is not a directory.
pub async fn rename_dir(from: &Path, to: &Path) -> io::Result<bool> {
    if !is_dir(from).await {
        return Ok(false);
    }
    tokio::fs::rename(from, to).await?;
    Ok(true)
}

/// Create or truncate a file with the given contents
pub async fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
    tokio::fs::write(path, contents).await
}

/// Whole file as text. Returns `Ok(None)` if `path` is not a regular file.
pub async fn read_file(path: &Path) -> io::Result<Option<String>> {
    if !is_file(path).await {
        return Ok(None);
    }
    tokio::fs::read_to_string(path).await.map(Some)
}

/// Overwrite an existing file. Returns `Ok(false)` if there is no such file.
pub async fn update_file(path: &Path, contents: impl AsRef<[u8]>) -> io::Result<bool> {
    if !is_file(path).await {
        return Ok(false);
    }
    tokio::fs::write(path, contents).await?;
    Ok(true)
}

pub async fn delete_file(path: &Path) -> io::Result<bool> {
    if !is_file(path).await {
        return Ok(false);
    }
    tokio::fs::remove_file(path).await?;
    Ok(true)
}

/// Move a file. Returns `Ok(false)` if `from` is not a file.
pub async fn rename_file(from: &Path, to: &Path) -> io::Result<bool> {
    if !is_file(from).await {
        return Ok(false);
    }
    tokio::fs::rename(from, to).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_dir_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(list_dir(&dir.path().join("missing")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_dir_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "a").unwrap();
        assert_eq!(list_dir(&file).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_dir_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let mut names = list_dir(dir.path()).await.unwrap().unwrap();
        names.sort();

        assert_eq!(names, vec!["a.txt".to_string(), "sub".to_string()]);
    }

    #[tokio::test]
    async fn test_create_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/c");

        create_dir(&target).await.unwrap();
        create_dir(&target).await.unwrap();

        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_delete_dir_non_empty_fails() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("full");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep.txt"), "x").unwrap();

        assert!(delete_dir(&target).await.is_err());
        assert!(target.is_dir());
    }

    #[tokio::test]
    async fn test_delete_dir_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!delete_dir(&dir.path().join("missing")).await.unwrap());
    }

    #[tokio::test]
    async fn test_rename_dir() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("old");
        let to = dir.path().join("new");
        std::fs::create_dir(&from).unwrap();

        assert!(rename_dir(&from, &to).await.unwrap());
        assert!(!from.exists());
        assert!(to.is_dir());
        assert!(!rename_dir(&from, &to).await.unwrap());
    }

    #[tokio::test]
    async fn test_write_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");

        write_file(&file, "a long first version").await.unwrap();
        write_file(&file, "short").await.unwrap();

        assert_eq!(read_file(&file).await.unwrap().as_deref(), Some("short"));
    }

    #[tokio::test]
    async fn test_read_file_on_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_file(dir.path()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_file_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");

        assert!(!update_file(&file, b"data").await.unwrap());
        assert!(!file.exists());

        std::fs::write(&file, "old").unwrap();
        assert!(update_file(&file, b"new").await.unwrap());
        assert_eq!(std::fs::read(&file).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_delete_and_rename_file() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("a.txt");
        let to = dir.path().join("b.txt");
        std::fs::write(&from, "a").unwrap();

        assert!(rename_file(&from, &to).await.unwrap());
        assert!(!rename_file(&from, &to).await.unwrap());
        assert!(delete_file(&to).await.unwrap());
        assert!(!delete_file(&to).await.unwrap());
    }
}
