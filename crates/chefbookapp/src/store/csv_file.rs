use super::DataStore;
use crate::dto::{Dto, FlatMap};
use crate::error::{ChefbookError, Result};
use std::fs::{self, File};
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub struct CsvFileStore<D> {
    path: PathBuf,
    _dto: PhantomData<fn() -> D>,
}

impl<D: Dto> CsvFileStore<D> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _dto: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, reason: impl ToString) -> ChefbookError {
        ChefbookError::StorageRead {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn write_error(&self, source: io::Error) -> ChefbookError {
        ChefbookError::StorageWrite {
            path: self.path.clone(),
            source,
        }
    }

    /// Reads all readable rows. Fails only when the file cannot be opened or
    /// has no readable header; bad rows are skipped.
    fn read_rows(&self) -> Result<Vec<D>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(self.read_error(err)),
        };

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
        let headers = reader.headers().map_err(|err| self.read_error(err))?.clone();

        let mut items = Vec::new();
        for row in reader.records() {
            match row {
                Ok(record) => {
                    let map: FlatMap = headers
                        .iter()
                        .zip(record.iter())
                        .map(|(key, value)| (key.to_string(), value.to_string()))
                        .collect();
                    items.push(D::from_flat_map(&map));
                }
                Err(err) if err.is_io_error() => {
                    warn!(path = %self.path.display(), error = %err, "stopped reading store");
                    break;
                }
                Err(err) => {
                    let line = err.position().map(|pos| pos.line());
                    warn!(path = %self.path.display(), ?line, error = %err, "skipping unreadable row");
                }
            }
        }
        Ok(items)
    }

    fn write_rows(&self, target: &Path, items: &[D]) -> io::Result<()> {
        let mut writer = csv::Writer::from_path(target)?;
        writer.write_record(D::FIELDS)?;
        for item in items {
            let map = item.to_flat_map();
            writer.write_record(
                D::FIELDS
                    .iter()
                    .map(|key| map.get(*key).map(String::as_str).unwrap_or("")),
            )?;
        }
        writer.flush()?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("store");
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl<D: Dto> DataStore<D> for CsvFileStore<D> {
    fn load(&self) -> Vec<D> {
        match self.read_rows() {
            Ok(items) => {
                debug!(path = %self.path.display(), rows = items.len(), "loaded store");
                items
            }
            Err(err) => {
                warn!(error = %err, "store unreadable, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&mut self, items: &[D]) -> Result<()> {
        if items.is_empty() {
            debug!(path = %self.path.display(), "nothing to save");
            return Ok(());
        }

        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|err| self.write_error(err))?;
        }

        // Atomic write
        let tmp_path = self.temp_path();
        if let Err(err) = self
            .write_rows(&tmp_path, items)
            .and_then(|()| fs::rename(&tmp_path, &self.path))
        {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.write_error(err));
        }

        debug!(path = %self.path.display(), rows = items.len(), "saved store");
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "deleted store");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(self.write_error(err)),
        }
    }
}
