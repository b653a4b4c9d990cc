//! JSON Lines files: one serialized entity per line.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use super::StorageError;

/// Writes entities of one type to a JSONL file.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a single entity, creating the file and its parents if needed.
    pub fn append(&self, entity: &T) -> Result<(), StorageError> {
        self.write_lines(std::slice::from_ref(entity), true)?;
        Ok(())
    }

    /// Replace the file's contents with `entities`.
    pub fn write_all(&self, entities: &[T]) -> Result<usize, StorageError> {
        self.write_lines(entities, false)
    }

    fn write_lines(&self, entities: &[T], append: bool) -> Result<usize, StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(&self.path)?;
        let mut writer = BufWriter::new(file);

        for entity in entities {
            serde_json::to_writer(&mut writer, entity)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;

        debug!("Wrote {} entities to {:?}", entities.len(), self.path);
        Ok(entities.len())
    }
}

/// Reads entities of one type from a JSONL file.
///
/// A missing file reads as empty. Lines that fail to parse are logged and
/// skipped so one bad record never hides the rest of a snapshot.
pub struct JsonlReader<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn read_all(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut entities = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(entity) => entities.push(entity),
                Err(e) => warn!("Skipping line {} in {:?}: {}", index + 1, self.path, e),
            }
        }

        debug!("Read {} entities from {:?}", entities.len(), self.path);
        Ok(entities)
    }

    /// First entity matching `predicate`, if any.
    pub fn find<F>(&self, predicate: F) -> Result<Option<T>, StorageError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.read_all()?.into_iter().find(predicate))
    }
}
