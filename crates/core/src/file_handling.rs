//! Local store handling for bowme.
//!
//! The store is a header-less CSV file with one `key,command` record per
//! line. It is seeded from a remote document the first time it is needed,
//! replaced wholesale on reload, and otherwise only ever appended to.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::candidates::CandidateEntry;
use crate::error::{Error, Result};
use crate::remote::{DocumentFetcher, RemoteSource};

const FILE_DESCRIPTION: &str = "bowme";

/// The on-disk CSV cache of candidates.
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn path_string(&self) -> String {
        self.path.display().to_string()
    }

    /// Seeds the store from `source` unless the file already exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store is missing and either fetching the
    /// document or writing the file fails.
    pub fn ensure_initialized<F: DocumentFetcher + ?Sized>(
        &self,
        fetcher: &F,
        source: &RemoteSource,
    ) -> Result<()> {
        if self.exists() {
            debug!("Store already present at `{}`", self.path_string());
            return Ok(());
        }

        info!("No store at `{}`, loading it from {}", self.path_string(), source);
        self.reload(fetcher, source)
    }

    /// Replaces the store with the content of `source`, whether or not it
    /// already exists. Nothing is merged.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching fails, in which case the existing file is
    /// left untouched, or if the file cannot be written.
    pub fn reload<F: DocumentFetcher + ?Sized>(
        &self,
        fetcher: &F,
        source: &RemoteSource,
    ) -> Result<()> {
        let content = fetcher.fetch(source)?;
        self.write_content(&content)
    }

    fn write_content(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::write_failure(self.path_string(), e))?;
        }

        fs::write(&self.path, content).map_err(|e| Error::write_failure(self.path_string(), e))?;
        debug!("Wrote {} bytes to `{}`", content.len(), self.path_string());
        Ok(())
    }

    /// Appends one `index,command` line to an existing store.
    ///
    /// Neither value is quoted, so a comma or newline in `index` (or a
    /// newline in `command`) changes how the line reads back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the store does not exist yet (no file is
    /// created), and [`Error::WriteFailure`] if it cannot be opened or
    /// written.
    pub fn append(&self, index: &str, command: &str) -> Result<()> {
        if !self.exists() {
            return Err(Error::not_found(self.path_string()));
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::write_failure(self.path_string(), e))?;

        let mut line = String::new();
        if !ends_with_newline(&mut file).map_err(|e| Error::write_failure(self.path_string(), e))? {
            line.push('\n');
        }
        line.push_str(&format!("{index},{command}\n"));

        file.write_all(line.as_bytes())
            .map_err(|e| Error::write_failure(self.path_string(), e))?;
        info!("Appended `{}` to `{}`", index, self.path_string());
        Ok(())
    }

    /// Reads every well-formed record in the store.
    ///
    /// Rows with the wrong number of fields, or with an empty key or
    /// command, are skipped. A parse error the reader cannot move past (an
    /// I/O failure or invalid UTF-8) ends the read early and whatever was
    /// collected up to that point is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the store cannot be opened.
    pub fn read_all(&self) -> Result<Vec<CandidateEntry>> {
        let file = File::open(&self.path).map_err(|e| {
            Error::io_error(FILE_DESCRIPTION.to_string(), self.path_string(), e)
        })?;

        Ok(read_entries(file))
    }
}

fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Parses header-less `key,command` CSV into entries.
pub fn read_entries<R: Read>(reader: R) -> Vec<CandidateEntry> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // Field count is checked per record
        .from_reader(reader);

    let mut entries = Vec::new();
    for (line, record) in csv_reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                error!("Can not read the csv: {}", e);
                break;
            }
        };

        match CandidateEntry::from_record(&record) {
            Ok(entry) => entries.push(entry),
            Err(reason) => debug!("Skipping record {}: {}", line + 1, reason),
        }
    }

    entries
}
