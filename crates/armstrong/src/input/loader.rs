//! Loading relation descriptions from JSON files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{ArmstrongError, Result};
use super::source::SourceMetadata;
use super::spec::RelationSpec;

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Largest file accepted, in bytes.
    pub max_file_bytes: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 1024 * 1024,
        }
    }
}

/// Reads relation descriptions from disk.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a file and return the description with its metadata.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(RelationSpec, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| ArmstrongError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        // Pipes and procfs files report a length of 0, so the read is bounded too.
        let metadata = file.metadata().map_err(|e| ArmstrongError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if metadata.len() > self.config.max_file_bytes {
            return Err(self.too_large(path, metadata.len()));
        }

        let contents = read_limited(&mut file, self.config.max_file_bytes).map_err(|e| {
            ArmstrongError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        })?;
        let size_bytes = contents.len() as u64;
        if size_bytes > self.config.max_file_bytes {
            return Err(self.too_large(path, size_bytes));
        }

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let spec: RelationSpec = serde_json::from_slice(&contents)?;
        debug!(
            path = %path.display(),
            attributes = spec.attributes.len(),
            dependencies = spec.dependencies.len(),
            "loaded relation description"
        );

        let source = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            spec.attributes.len(),
            spec.dependencies.len(),
        );

        Ok((spec, source))
    }

    fn too_large(&self, path: &Path, size_bytes: u64) -> ArmstrongError {
        ArmstrongError::Config(format!(
            "'{}' is {} bytes, the limit is {}",
            path.display(),
            size_bytes,
            self.config.max_file_bytes
        ))
    }
}

/// Read at most `limit + 1` bytes, enough to tell whether the limit was exceeded.
fn read_limited<R: Read>(reader: R, limit: u64) -> std::io::Result<Vec<u8>> {
    let mut contents = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut contents)?;
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_records_metadata() {
        let file = create_test_file(
            r#"{"attributes": ["A", "B"], "dependencies": [{"lhs": ["A"], "rhs": ["B"]}]}"#,
        );

        let (spec, source) = Loader::new().load(file.path()).unwrap();
        assert_eq!(spec.attributes.len(), 2);
        assert_eq!(source.attribute_count, 2);
        assert_eq!(source.dependency_count, 1);
        assert!(source.hash.starts_with("sha256:"));
        assert_eq!(source.hash.len(), "sha256:".len() + 64);
    }

    #[test]
    fn test_same_content_same_hash() {
        let content = r#"{"attributes": ["A"]}"#;
        let (_, a) = Loader::new().load(create_test_file(content).path()).unwrap();
        let (_, b) = Loader::new().load(create_test_file(content).path()).unwrap();
        assert_eq!(a.hash, b.hash);
    }

    #[test]
    fn test_missing_file() {
        let result = Loader::new().load("/nonexistent/relation.json");
        assert!(matches!(result, Err(ArmstrongError::Io { .. })));
    }

    #[test]
    fn test_size_limit() {
        let file = create_test_file(r#"{"attributes": ["A", "B", "C", "D"]}"#);
        let loader = Loader::with_config(LoaderConfig { max_file_bytes: 8 });
        assert!(matches!(loader.load(file.path()), Err(ArmstrongError::Config(_))));
    }

    #[test]
    fn test_read_limited_stops_after_limit() {
        let source = std::io::Cursor::new(vec![b' '; 4096]);
        let contents = read_limited(source, 64).unwrap();
        assert_eq!(contents.len(), 65);

        let source = std::io::Cursor::new(vec![b' '; 10]);
        assert_eq!(read_limited(source, 64).unwrap().len(), 10);
    }

    #[test]
    fn test_size_recorded_from_contents() {
        let content = r#"{"attributes": ["A", "B"]}"#;
        let (_, source) = Loader::new().load(create_test_file(content).path()).unwrap();
        assert_eq!(source.size_bytes, content.len() as u64);
    }

    #[cfg(unix)]
    #[test]
    fn test_size_limit_applies_to_pipes() {
        let dir = tempfile::tempdir().unwrap();
        let fifo = dir.path().join("relation.json");
        let status = std::process::Command::new("mkfifo").arg(&fifo).status().unwrap();
        assert!(status.success());

        let writer_path = fifo.clone();
        let writer = std::thread::spawn(move || {
            let mut pipe = std::fs::OpenOptions::new().write(true).open(writer_path).unwrap();
            let names: Vec<String> = (0..500).map(|i| format!("\"a{}\"", i)).collect();
            let json = format!(r#"{{"attributes": [{}]}}"#, names.join(", "));
            // The reader may hang up once it has seen enough.
            let _ = pipe.write_all(json.as_bytes());
        });

        let loader = Loader::with_config(LoaderConfig { max_file_bytes: 64 });
        let result = loader.load(&fifo);
        writer.join().unwrap();

        assert!(matches!(result, Err(ArmstrongError::Config(_))));
    }

    #[test]
    fn test_invalid_json() {
        let file = create_test_file("{ not json");
        assert!(matches!(
            Loader::new().load(file.path()),
            Err(ArmstrongError::Json(_))
        ));
    }
}
