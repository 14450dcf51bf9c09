use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use serde::{Deserialize, Serialize};

/// Storage for the admin session's access and refresh tokens.
///
/// Implementations use interior mutability so one store can be shared between
/// clones of [`ApiClient`](super::ApiClient).
pub trait TokenStore: Send + Sync {
    fn access_token(&self) -> Option<String>;

    fn refresh_token(&self) -> Option<String>;

    /// Stores both tokens after a login.
    fn set_tokens(&self, access_token: &str, refresh_token: &str);

    /// Replaces the access token after a refresh, keeping the refresh token.
    fn set_access_token(&self, access_token: &str);

    fn clear(&self);

    fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
struct Tokens {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

impl Tokens {
    fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}

fn read(lock: &RwLock<Tokens>) -> RwLockReadGuard<'_, Tokens> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write(lock: &RwLock<Tokens>) -> RwLockWriteGuard<'_, Tokens> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Tokens kept for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<Tokens>,
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        read(&self.tokens).access_token.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        read(&self.tokens).refresh_token.clone()
    }

    fn set_tokens(&self, access_token: &str, refresh_token: &str) {
        let mut tokens = write(&self.tokens);
        tokens.access_token = Some(access_token.to_string());
        tokens.refresh_token = Some(refresh_token.to_string());
    }

    fn set_access_token(&self, access_token: &str) {
        write(&self.tokens).access_token = Some(access_token.to_string());
    }

    fn clear(&self) {
        *write(&self.tokens) = Tokens::default();
    }
}

/// Tokens persisted as JSON so a session survives restarts of the client.
///
/// Reads are served from memory; every change is written through to disk.
/// Write failures are logged and the in-memory session stays usable.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    tokens: RwLock<Tokens>,
}

impl FileTokenStore {
    /// Opens the store at `path`, loading any session saved there.
    ///
    /// A missing or unreadable file starts an empty session.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let tokens = match std::fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed token file {}: {}", path.display(), e);
                Tokens::default()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Tokens::default(),
            Err(e) => {
                tracing::warn!("Failed to read token file {}: {}", path.display(), e);
                Tokens::default()
            }
        };

        Self {
            path,
            tokens: RwLock::new(tokens),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, tokens: &Tokens) {
        let result = if tokens.is_empty() {
            match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                other => other,
            }
        } else {
            serde_json::to_vec_pretty(tokens)
                .map_err(std::io::Error::other)
                .and_then(|bytes| std::fs::write(&self.path, bytes))
        };

        if let Err(e) = result {
            tracing::warn!("Failed to save token file {}: {}", self.path.display(), e);
        }
    }
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> Option<String> {
        read(&self.tokens).access_token.clone()
    }

    fn refresh_token(&self) -> Option<String> {
        read(&self.tokens).refresh_token.clone()
    }

    fn set_tokens(&self, access_token: &str, refresh_token: &str) {
        let mut tokens = write(&self.tokens);
        tokens.access_token = Some(access_token.to_string());
        tokens.refresh_token = Some(refresh_token.to_string());
        self.persist(&tokens);
    }

    fn set_access_token(&self, access_token: &str) {
        let mut tokens = write(&self.tokens);
        tokens.access_token = Some(access_token.to_string());
        self.persist(&tokens);
    }

    fn clear(&self) {
        let mut tokens = write(&self.tokens);
        *tokens = Tokens::default();
        self.persist(&tokens);
    }
}
