//! [`MirrorPair`] builder for reconciliation test scenarios.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary workspace holding `src/` and `dst/` directories.
///
/// # Example
///
/// ```rust,no_run
/// use mirror_test_utils::MirrorPair;
///
/// let pair = MirrorPair::new()
///     .with_source_file("a.txt", "hello")
///     .with_dest_file("c.txt", "stale");
/// pair.assert_dest_file("c.txt", "stale");
/// ```
pub struct MirrorPair {
    temp_dir: TempDir,
    source: PathBuf,
    destination: PathBuf,
}

impl Default for MirrorPair {
    fn default() -> Self {
        Self::new()
    }
}

impl MirrorPair {
    /// Create empty `src/` and `dst/` directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("src");
        let destination = temp_dir.path().join("dst");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&destination).unwrap();
        Self {
            temp_dir,
            source,
            destination,
        }
    }

    /// Root of the temporary workspace, outside both mirrored directories.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn with_source_file(self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.write_source(name, content);
        self
    }

    pub fn with_dest_file(self, name: &str, content: impl AsRef<[u8]>) -> Self {
        self.write_dest(name, content);
        self
    }

    pub fn write_source(&self, name: &str, content: impl AsRef<[u8]>) {
        fs::write(self.source.join(name), content).unwrap();
    }

    pub fn write_dest(&self, name: &str, content: impl AsRef<[u8]>) {
        fs::write(self.destination.join(name), content).unwrap();
    }

    pub fn remove_source(&self, name: &str) {
        fs::remove_file(self.source.join(name)).unwrap();
    }

    /// Remove the destination directory entirely.
    pub fn remove_destination(&self) {
        fs::remove_dir_all(&self.destination).unwrap();
    }

    /// Name to content map of the source's regular files.
    pub fn source_files(&self) -> BTreeMap<String, Vec<u8>> {
        read_files(&self.source)
    }

    /// Name to content map of the destination's regular files.
    pub fn dest_files(&self) -> BTreeMap<String, Vec<u8>> {
        read_files(&self.destination)
    }

    /// Assert that the destination holds exactly the source's files.
    pub fn assert_mirrored(&self) {
        assert_eq!(
            self.source_files(),
            self.dest_files(),
            "destination does not mirror source"
        );
    }

    pub fn assert_dest_file(&self, name: &str, expected: &str) {
        let path = self.destination.join(name);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
        assert_eq!(content, expected, "Content mismatch for {name}");
    }

    pub fn assert_dest_missing(&self, name: &str) {
        let path = self.destination.join(name);
        assert!(!path.exists(), "Expected {} to be absent", path.display());
    }
}

fn read_files(dir: &Path) -> BTreeMap<String, Vec<u8>> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().unwrap().is_file())
        .map(|entry| {
            (
                entry.file_name().to_string_lossy().into_owned(),
                fs::read(entry.path()).unwrap(),
            )
        })
        .collect()
}
