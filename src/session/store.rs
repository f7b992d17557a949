/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Token storage backends
//!
//! The client writes the session through a [`TokenStore`] on every change and
//! reads it back once at construction, so tokens survive a restart when a
//! persistent backend is used.

use crate::error::AppError;
use crate::session::state::Session;
use std::fmt::Debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::debug;

/// Storage for the session tokens
pub trait TokenStore: Send + Sync + Debug {
    /// Loads the stored session, empty when nothing was stored
    fn load(&self) -> Result<Session, AppError>;

    /// Replaces the stored session
    fn save(&self, session: &Session) -> Result<(), AppError>;

    /// Removes every stored token; repeated calls are no-ops
    fn clear(&self) -> Result<(), AppError>;
}

/// Process local store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    session: RwLock<Session>,
}

impl MemoryTokenStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `session`
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(session),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Session, AppError> {
        self.session
            .read()
            .map(|session| session.clone())
            .map_err(|_| AppError::Storage("memory store poisoned".to_string()))
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        let mut stored = self
            .session
            .write()
            .map_err(|_| AppError::Storage("memory store poisoned".to_string()))?;
        *stored = session.clone();
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        self.save(&Session::default())
    }
}

/// JSON file store
///
/// The file holds one object with the `access_token` and `refresh_token`
/// entries. Writes go to a sibling temporary file that is then renamed over
/// the target.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Creates a store backed by `path`; the file is created on first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Session, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No token file at {}", self.path.display());
                return Ok(Session::default());
            }
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Session::default());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, session: &Session) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        write_private(&tmp, &serde_json::to_vec_pretty(session)?)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Saved tokens to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Writes `contents` to `path`, readable by the owner only on unix
fn write_private(path: &Path, contents: &[u8]) -> Result<(), AppError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(contents)?;
    file.sync_all()?;
    Ok(())
}
