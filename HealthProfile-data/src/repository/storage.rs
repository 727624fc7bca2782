use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use super::codec::LoadReport;
use super::errors::RepositoryError;
use super::profile::ProfileRepositoryTrait;

/// File storage operations for health profiles
///
/// Every save overwrites the whole file and every load replaces the whole
/// in-memory set. The file handle never outlives a single call.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write every record of `repository` to the file, returning the count
    pub fn save<R: ProfileRepositoryTrait + ?Sized>(&self, repository: &R) -> Result<usize, RepositoryError> {
        let text = repository.serialize();
        let count = repository.list_all().len();

        let mut file = File::create(&self.path).map_err(|source| {
            error!("Failed to open {} for writing: {}", self.path.display(), source);
            RepositoryError::FileOpen {
                path: self.path.clone(),
                source,
            }
        })?;

        file.write_all(text.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|source| {
                error!("Failed to write {}: {}", self.path.display(), source);
                RepositoryError::FileWrite {
                    path: self.path.clone(),
                    source,
                }
            })?;

        info!("Saved {} health profiles to {}", count, self.path.display());
        Ok(count)
    }

    /// Replace the records of `repository` with the file's contents
    ///
    /// On open failure the repository is left untouched.
    pub fn load<R: ProfileRepositoryTrait + ?Sized>(&self, repository: &mut R) -> Result<LoadReport, RepositoryError> {
        let bytes = fs::read(&self.path).map_err(|source| {
            error!("Failed to open {} for reading: {}", self.path.display(), source);
            RepositoryError::FileOpen {
                path: self.path.clone(),
                source,
            }
        })?;

        let report = repository.deserialize(&bytes);
        match &report.malformed {
            None => info!("Loaded {} health profiles from {}", report.loaded, self.path.display()),
            Some(malformed) => warn!(
                "Loaded {} health profiles from {}; stopped at line {}: {}",
                report.loaded,
                self.path.display(),
                malformed.line,
                malformed.reason
            ),
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::health_record::Measurements;
    use crate::repository::profile::ProfileRepository;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("health_profiles.txt"));

        let mut repo = ProfileRepository::new();
        repo.create("Alice", Measurements::new(60.0, 1.65, 36.8, 90.0)).unwrap();
        repo.create("Carl", Measurements::new(100.0, 1.7, 38.5, 150.0)).unwrap();
        assert_eq!(storage.save(&repo).unwrap(), 2);

        let mut fresh = ProfileRepository::new();
        let report = storage.load(&mut fresh).unwrap();

        assert_eq!(report.loaded, 2);
        assert!(report.is_complete());
        assert_eq!(fresh.list_all(), repo.list_all());
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("health_profiles.txt");
        let storage = FileStorage::new(&path);

        let mut repo = ProfileRepository::new();
        repo.create("Alice", Measurements::new(60.0, 1.65, 36.8, 90.0)).unwrap();
        repo.create("Bob", Measurements::new(80.0, 1.8, 37.0, 100.0)).unwrap();
        storage.save(&repo).unwrap();

        repo.delete("Alice").unwrap();
        storage.save(&repo).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
        assert!(contents.starts_with("Bob 80 1.8 37 100 "));
    }

    #[test]
    fn test_load_missing_file_leaves_repository_unchanged() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("missing.txt"));

        let mut repo = ProfileRepository::new();
        repo.create("Alice", Measurements::new(60.0, 1.65, 36.8, 90.0)).unwrap();

        let result = storage.load(&mut repo);

        assert!(matches!(result, Err(RepositoryError::FileOpen { .. })));
        assert_eq!(repo.len(), 1);
        assert!(repo.find("Alice").is_some());
    }

    #[test]
    fn test_save_into_missing_directory_fails_to_open() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("no-such-dir").join("profiles.txt"));

        let result = storage.save(&ProfileRepository::new());

        assert!(matches!(result, Err(RepositoryError::FileOpen { .. })));
    }

    #[test]
    fn test_load_truncates_at_malformed_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("health_profiles.txt");
        fs::write(
            &path,
            "Alice 60 1.65 36.8 90 22.03 Normal weight Normal Normal\ngarbage\n",
        )
        .unwrap();

        let mut repo = ProfileRepository::new();
        let report = FileStorage::new(&path).load(&mut repo).unwrap();

        assert_eq!(report.loaded, 1);
        assert_eq!(report.malformed.unwrap().line, 2);
        assert!(repo.find("Alice").is_some());
    }

    #[test]
    fn test_load_stops_at_line_that_is_not_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("health_profiles.txt");
        let mut contents = b"Alice 60 1.65 36.8 90 22.03 Normal weight Normal Normal\n".to_vec();
        contents.extend_from_slice(b"B\xff 60 1.65 36.8 90 22.03 Normal weight Normal Normal\n");
        fs::write(&path, contents).unwrap();

        let mut repo = ProfileRepository::new();
        let report = FileStorage::new(&path).load(&mut repo).unwrap();

        assert_eq!(report.loaded, 1);
        assert_eq!(report.malformed.unwrap().line, 2);
        assert!(repo.find("Alice").is_some());
    }

    #[test]
    fn test_save_onto_directory_fails_to_open() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        let result = storage.save(&ProfileRepository::new());

        assert!(matches!(result, Err(RepositoryError::FileOpen { .. })));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_save_to_full_device_fails_to_write() {
        // Opens fine, every write fails with ENOSPC
        let device = Path::new("/dev/full");
        if !device.exists() {
            return;
        }
        let storage = FileStorage::new(device);
        let mut repo = ProfileRepository::new();
        repo.create("Alice", Measurements::new(60.0, 1.65, 36.8, 90.0)).unwrap();

        let result = storage.save(&repo);

        assert!(matches!(result, Err(RepositoryError::FileWrite { .. })));
    }
}
