use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use crate::repositories::traits::BookRepository;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Address book repository backed by a single binary file.
///
/// The whole book is encoded with bincode's standard configuration. Saves go
/// to a sibling `.tmp` file that is then renamed over the target, so a crash
/// mid-write leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct FileBookRepository {
    path: PathBuf,
}

impl FileBookRepository {
    /// Create a repository reading and writing `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> io::Result<PathBuf> {
        let file_name = self.path.file_name().ok_or_else(|| {
            io::Error::new(
                ErrorKind::InvalidInput,
                format!("{} does not name a file", self.path.display()),
            )
        })?;
        let mut temp_name = file_name.to_os_string();
        temp_name.push(".tmp");
        Ok(self.path.with_file_name(temp_name))
    }
}

impl BookRepository for FileBookRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No data file at {}, starting with an empty address book",
                    self.path.display()
                );
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(StorageError::Io(e)),
        };

        let (book, _): (AddressBook, usize) =
            bincode::serde::decode_from_slice(&bytes, bincode::config::standard())?;
        info!(
            "Loaded {} contacts from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let bytes = bincode::serde::encode_to_vec(book, bincode::config::standard())?;
        let temp_path = self.temp_path()?;

        fs::write(&temp_path, &bytes)?;
        fs::rename(&temp_path, &self.path)?;

        debug!("Wrote {} bytes to {}", bytes.len(), self.path.display());
        info!("Saved {} contacts to {}", book.len(), self.path.display());
        Ok(())
    }
}
