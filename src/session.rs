// ABOUTME: Client-side session persistence (auth token + cached user profile)
// Set at login/register, cleared at logout, read by anything that needs auth status

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{AuthPayload, User};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Failed to access session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt session file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// What is stored on disk between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

impl Session {
    pub fn from_auth(payload: AuthPayload) -> Self {
        Self {
            token: Some(payload.token),
            user: Some(payload.user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Read access to the current session.
///
/// Injected into components that gate on auth status so tests can supply fakes.
#[cfg_attr(test, mockall::automock)]
pub trait SessionProvider {
    fn token(&self) -> Option<String>;
    fn user(&self) -> Option<User>;
    fn is_authenticated(&self) -> bool;
}

/// File-backed session store.
///
/// Reads go to disk every time, so a login done in another process is seen
/// without restarting.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the stored session. A missing file is an empty session.
    pub fn load(&self) -> Result<Session, SessionError> {
        if !self.path.exists() {
            return Ok(Session::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| SessionError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| SessionError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SessionError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(session).map_err(|source| SessionError::Parse {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, content).map_err(|source| SessionError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!("Saved session to {}", self.path.display());
        Ok(())
    }

    /// Store token and user returned by login or register
    pub fn store_auth(&self, payload: AuthPayload) -> Result<Session, SessionError> {
        let session = Session::from_auth(payload);
        self.save(&session)?;
        Ok(session)
    }

    /// Remove token and cached user
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared session at {}", self.path.display());
                Ok(())
            }
            // Already logged out
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn load_or_empty(&self) -> Session {
        match self.load() {
            Ok(session) => session,
            Err(e) => {
                warn!("Treating session as logged out: {}", e);
                Session::default()
            }
        }
    }
}

impl SessionProvider for SessionStore {
    fn token(&self) -> Option<String> {
        self.load_or_empty().token.filter(|t| !t.is_empty())
    }

    fn user(&self) -> Option<User> {
        self.load_or_empty().user
    }

    fn is_authenticated(&self) -> bool {
        let authenticated = self.load_or_empty().is_authenticated();
        debug!("Session authenticated: {}", authenticated);
        authenticated
    }
}
