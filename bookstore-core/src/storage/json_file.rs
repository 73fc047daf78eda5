//! JSON file backed repository

use super::{poisoned, BookRepository, Catalog, StorageResult};
use crate::types::{Book, NewBook};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Repository persisting the whole catalog to a single JSON document
///
/// The file is the source of truth: every operation reads it afresh, so changes made
/// through another handle or process on the same path are visible. Mutations are
/// serialized within the process and written atomically; a failed write leaves the
/// file unchanged.
pub struct JsonFileRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileRepository {
    /// Open a catalog file, starting empty if it does not exist yet
    /// An existing file is loaded and checked up front
    pub fn open(path: impl Into<PathBuf>) -> StorageResult<Self> {
        let path = path.into();
        load(&path)?;
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut Catalog) -> StorageResult<T>,
    ) -> StorageResult<T> {
        let _guard = self.write_lock.lock().map_err(|_| poisoned())?;
        let current = load(&self.path)?;
        let mut next = current.clone();
        let out = apply(&mut next)?;
        if current != next {
            save(&self.path, &next)?;
        }
        Ok(out)
    }
}

fn load(path: &Path) -> StorageResult<Catalog> {
    // Handle NotFound as an empty catalog
    let catalog: Catalog = match std::fs::read_to_string(path) {
        Ok(data) => serde_json::from_str(&data)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Catalog::default(),
        Err(e) => return Err(e.into()),
    };
    catalog.verified()
}

/// Write to a temp file in the same directory, then rename over the target
fn save(path: &Path, catalog: &Catalog) -> StorageResult<()> {
    let data = serde_json::to_string_pretty(catalog)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(&temp_path, path)?;
    Ok(())
}

impl BookRepository for JsonFileRepository {
    fn find_by_id(&self, id: i64) -> StorageResult<Option<Book>> {
        Ok(load(&self.path)?.get(id))
    }

    fn find_all(&self) -> StorageResult<Vec<Book>> {
        Ok(load(&self.path)?.all())
    }

    fn insert(&self, book: NewBook) -> StorageResult<Book> {
        self.mutate(|catalog| catalog.insert(book))
    }

    fn update(&self, id: i64, book: NewBook) -> StorageResult<Option<Book>> {
        self.mutate(|catalog| Ok(catalog.update(id, book)))
    }

    fn delete(&self, id: i64) -> StorageResult<bool> {
        self.mutate(|catalog| Ok(catalog.remove(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty_catalog() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::open(dir.path().join("books.json")).unwrap();
        assert!(repo.find_all().unwrap().is_empty());
        // Nothing written until the first mutation
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_reopen_preserves_books_and_next_id() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("books.json");

        {
            let repo = JsonFileRepository::open(&path).unwrap();
            repo.insert(NewBook::new("Dune", "Frank Herbert").with_year(1965))
                .unwrap();
            let doomed = repo.insert(NewBook::new("Temp", "Nobody")).unwrap();
            assert!(repo.delete(doomed.id).unwrap());
        }

        let repo = JsonFileRepository::open(&path).unwrap();
        let dune = repo.find_by_id(1).unwrap().unwrap();
        assert_eq!(dune.title, "Dune");
        assert_eq!(dune.published_year, Some(1965));
        assert_eq!(repo.find_by_id(2).unwrap(), None);

        let next = repo.insert(NewBook::new("Emma", "Jane Austen")).unwrap();
        assert_eq!(next.id, 3);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_serialization_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        std::fs::write(&path, "not json").unwrap();

        let err = JsonFileRepository::open(&path).err().unwrap();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn test_mismatched_entry_rejected_on_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        std::fs::write(
            &path,
            r#"{"next_id":1,"books":{"1":{"id":5,"title":"Dune","author":"Frank Herbert","published_year":null}}}"#,
        )
        .unwrap();

        let err = JsonFileRepository::open(&path).err().unwrap();
        assert!(matches!(err, StorageError::Backend(_)));
    }

    #[test]
    fn test_stale_next_id_does_not_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        std::fs::write(
            &path,
            r#"{"next_id":1,"books":{"1":{"id":1,"title":"Dune","author":"Frank Herbert","published_year":null}}}"#,
        )
        .unwrap();

        let repo = JsonFileRepository::open(&path).unwrap();
        let added = repo.insert(NewBook::new("Emma", "Jane Austen")).unwrap();
        assert_eq!(added.id, 2);
        assert_eq!(repo.find_all().unwrap().len(), 2);
        assert_eq!(repo.find_by_id(1).unwrap().unwrap().title, "Dune");
    }

    #[test]
    fn test_two_handles_share_one_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");

        let server = JsonFileRepository::open(&path).unwrap();
        let cli = JsonFileRepository::open(&path).unwrap();

        let from_cli = cli.insert(NewBook::new("Kindred", "Octavia E. Butler")).unwrap();
        assert_eq!(server.find_by_id(from_cli.id).unwrap(), Some(from_cli.clone()));

        let from_server = server.insert(NewBook::new("Emma", "Jane Austen")).unwrap();
        assert_eq!(from_server.id, from_cli.id + 1);

        let ids: Vec<i64> = cli.find_all().unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, [from_cli.id, from_server.id]);

        assert!(cli.delete(from_server.id).unwrap());
        assert_eq!(server.find_by_id(from_server.id).unwrap(), None);
    }
}
