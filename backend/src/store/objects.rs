use super::StoreError;
use common::model::application::DOCUMENTS_BUCKET;
use md5::Context;
use regex::Regex;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::LazyLock;

/// Object keys are one path segment made of safe characters, not starting
/// with a dot.
static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-][A-Za-z0-9._-]*$").expect("valid key regex"));

const BUCKETS: [&str; 1] = [DOCUMENTS_BUCKET];

/// Filesystem-backed buckets rooted at a single directory.
#[derive(Debug, Clone)]
pub struct ObjectStore {
    root: PathBuf,
    max_bytes: usize,
}

impl ObjectStore {
    pub fn new(root: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    /// Creates the directory of every known bucket.
    pub fn init(&self) -> Result<(), StoreError> {
        for bucket in BUCKETS {
            fs::create_dir_all(self.root.join(bucket))?;
        }
        Ok(())
    }

    /// Resolves `bucket`/`key` to a file path after validating both.
    pub fn object_path(&self, bucket: &str, key: &str) -> Result<PathBuf, StoreError> {
        if !BUCKETS.contains(&bucket) {
            return Err(StoreError::BucketNotFound(bucket.to_string()));
        }
        if !KEY_RE.is_match(key) {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(bucket).join(key))
    }

    /// Opens a new object for writing. Existing keys are never overwritten.
    pub fn create(&self, bucket: &str, key: &str) -> Result<ObjectWriter, StoreError> {
        let path = self.object_path(bucket, key)?;
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => StoreError::AlreadyExists,
                _ => StoreError::Io(e),
            })?;

        Ok(ObjectWriter {
            path,
            writer: Some(BufWriter::new(file)),
            hasher: Context::new(),
            written: 0,
            max_bytes: self.max_bytes,
            committed: false,
        })
    }

    /// Path of an existing object.
    pub fn existing(&self, bucket: &str, key: &str) -> Result<PathBuf, StoreError> {
        let path = self.object_path(bucket, key)?;
        if path.is_file() {
            Ok(path)
        } else {
            Err(StoreError::ObjectNotFound)
        }
    }
}

/// An object being written. Dropping it without [`ObjectWriter::finish`]
/// removes the partial file.
pub struct ObjectWriter {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
    hasher: Context,
    written: usize,
    max_bytes: usize,
    committed: bool,
}

impl ObjectWriter {
    pub fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), StoreError> {
        self.written += chunk.len();
        if self.written > self.max_bytes {
            return Err(StoreError::TooLarge(self.max_bytes));
        }
        self.hasher.consume(chunk);
        if let Some(writer) = self.writer.as_mut() {
            writer.write_all(chunk)?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Flushes the object and returns its MD5 hex digest.
    pub fn finish(mut self) -> Result<String, StoreError> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        let hasher = std::mem::replace(&mut self.hasher, Context::new());
        self.committed = true;
        Ok(format!("{:x}", hasher.finalize()))
    }
}

impl Drop for ObjectWriter {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        self.writer.take();
        let _ = fs::remove_file(&self.path);
    }
}
