//! Device-local session storage.
//!
//! Facades read the session to parametrize calls (the hotel name, the signed
//! in email) and write it after a successful login or registration. Storage
//! is injected through [`SessionStore`]; two implementations ship here.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The keys a session holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SessionKey {
    /// Email of the signed in user.
    UserEmail,
    /// `"admin"` or `"user"`.
    UserType,
    /// Hotel the admin dashboards are scoped to.
    HotelName,
    /// Backend identifier of the user.
    UserId,
    /// Display name.
    UserName,
}

impl SessionKey {
    /// Every key, in a stable order.
    pub const ALL: [SessionKey; 5] = [
        SessionKey::UserEmail,
        SessionKey::UserType,
        SessionKey::HotelName,
        SessionKey::UserId,
        SessionKey::UserName,
    ];

    /// The storage key.
    pub fn as_str(self) -> &'static str {
        match self {
            SessionKey::UserEmail => "userEmail",
            SessionKey::UserType => "userType",
            SessionKey::HotelName => "hotelName",
            SessionKey::UserId => "userId",
            SessionKey::UserName => "userName",
        }
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by session stores.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The backing file could not be read or written.
    #[error("session file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file does not contain a JSON object of strings.
    #[error("session file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// A thread panicked while holding the store's lock.
    #[error("session store lock poisoned")]
    Poisoned,
}

/// Key/value persistence for session identifiers.
pub trait SessionStore: Send + Sync {
    /// Reads a value.
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError>;

    /// Writes a value, replacing any previous one.
    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError>;

    /// Removes a value. Removing a missing key is not an error.
    fn remove(&self, key: SessionKey) -> Result<(), SessionError>;

    /// Removes every value (sign out).
    fn clear(&self) -> Result<(), SessionError>;

    /// Reads a value, treating an empty string as missing.
    fn get_non_empty(&self, key: SessionKey) -> Result<Option<String>, SessionError> {
        Ok(self.get(key)?.filter(|value| !value.trim().is_empty()))
    }
}

/// Session held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<SessionKey, String>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError> {
        let values = self.values.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(values.get(&key).cloned())
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError> {
        let mut values = self.values.lock().map_err(|_| SessionError::Poisoned)?;
        values.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        let mut values = self.values.lock().map_err(|_| SessionError::Poisoned)?;
        values.remove(&key);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut values = self.values.lock().map_err(|_| SessionError::Poisoned)?;
        values.clear();
        Ok(())
    }
}

/// Session persisted as a JSON object in a single file.
///
/// Every operation reads the file; writes rewrite it whole. A missing file
/// is an empty session.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

type Entries = BTreeMap<String, String>;

impl FileSessionStore {
    /// Uses `path` as the backing file. Nothing is read until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Entries, SessionError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(Entries::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(err) => Err(err.into()),
        }
    }

    fn store(&self, entries: &Entries) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(entries)?)?;
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut Entries)) -> Result<(), SessionError> {
        let _guard = self.lock.lock().map_err(|_| SessionError::Poisoned)?;
        let mut entries = self.load()?;
        f(&mut entries);
        self.store(&entries)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<String>, SessionError> {
        let _guard = self.lock.lock().map_err(|_| SessionError::Poisoned)?;
        Ok(self.load()?.remove(key.as_str()))
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<(), SessionError> {
        self.update(|entries| {
            entries.insert(key.as_str().to_string(), value.to_string());
        })
    }

    fn remove(&self, key: SessionKey) -> Result<(), SessionError> {
        self.update(|entries| {
            entries.remove(key.as_str());
        })
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.update(Entries::clear)
    }
}
