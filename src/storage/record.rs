use std::fs;
use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use snafu::prelude::*;

/// A reader/writer for one persisted record file. Reading a missing file
/// yields `None` instead of an error, since a record that was never saved
/// is a normal condition; writing replaces the whole file.
pub struct RecordFile {
    path: PathBuf,
}

impl RecordFile {
    /// Creates a new [`RecordFile`].
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read the record content if the file exists.
    ///
    /// # Errors
    ///
    /// This function will return an error if reading fails for any reason
    /// other than the file being absent.
    pub fn read(&self) -> Result<Option<String>, RecordFileError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).context(FileSystemSnafu {
                when: "Reading record",
            }),
        }
    }

    /// Replace the record content, creating the leading directories if they
    /// didn't exist before.
    ///
    /// # Errors
    ///
    /// This function will return an error if the directories or the file
    /// cannot be written.
    pub fn write(&self, content: &str) -> Result<(), RecordFileError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context(FileSystemSnafu {
                when: "Creating record directory",
            })?;
        }

        fs::write(&self.path, content).context(FileSystemSnafu {
            when: "Writing record",
        })
    }
}

/// An error type for accessing a record file.
#[derive(Debug, Snafu, Clone)]
#[non_exhaustive]
pub enum RecordFileError {
    #[snafu(display("File system error: {when}"))]
    FileSystem {
        when: String,
        #[snafu(source(from(IoError, Arc::new)))]
        source: Arc<IoError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_fs::prelude::*;
    use assert_fs::TempDir;
    use predicates::path as path_pred;

    #[test]
    fn read_missing_record_yields_none() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("stats.json");
        file.assert(path_pred::missing());

        let record = RecordFile::new(file.to_path_buf());
        assert_eq!(record.read().unwrap(), None);
    }

    #[test]
    fn write_then_read_round_trips() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("settings.toml");

        let record = RecordFile::new(file.to_path_buf());
        record.write("content for testing").unwrap();
        assert_eq!(record.read().unwrap().as_deref(), Some("content for testing"));
    }

    #[test]
    fn write_creates_leading_directories() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("nested/dir/settings.toml");
        file.assert(path_pred::missing());

        let record = RecordFile::new(file.to_path_buf());
        record.write("content").unwrap();
        file.assert("content");
    }
}
