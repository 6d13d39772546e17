use super::{ensure_parent, CatalogBackend};
use crate::error::{Result, ShelfError};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogBackend for FileBackend {
    fn read_catalog(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                debug!(path = %self.path.display(), bytes = content.len(), "read catalog");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ShelfError::Io(e)),
        }
    }

    fn create_catalog(&self) -> Result<()> {
        ensure_parent(&self.path)?;
        fs::File::create(&self.path).map_err(ShelfError::Io)?;
        debug!(path = %self.path.display(), "created empty catalog");
        Ok(())
    }

    fn write_catalog(&self, content: &str) -> Result<()> {
        ensure_parent(&self.path)?;
        fs::write(&self.path, content).map_err(ShelfError::Io)?;
        debug!(path = %self.path.display(), bytes = content.len(), "wrote catalog");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
