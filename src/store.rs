//! Session persistence boundary.
//!
//! Game state is typed everywhere in the crate and only becomes JSON here.

use std::collections::HashMap;

use chrono::Utc;

use crate::error::StoreError;
use crate::session::Session;
use crate::sync::Mutex;

/// Load and save contract for session records.
///
/// Implementations must serialize [`update`](Self::update) calls against the
/// same identifier so that two actions on one session never interleave.
pub trait SessionStore {
    /// Stores a new session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AlreadyExists`] if the identifier is taken.
    fn insert(&self, session: &Session) -> Result<(), StoreError>;

    /// Loads a session.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown identifier.
    fn load(&self, id: &str) -> Result<Session, StoreError>;

    /// Loads a session, applies `f` and saves the result.
    ///
    /// Nothing is saved when `f` fails.
    ///
    /// # Errors
    ///
    /// Returns the error from `f`, or a [`StoreError`] converted into `E`.
    fn update<T, E, F>(&self, id: &str, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Session) -> Result<T, E>,
        E: From<StoreError>;
}

/// In-process [`SessionStore`] holding JSON records.
///
/// A single lock covers the whole map, so updates are serialized across all
/// sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored sessions.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

fn decode(record: &str) -> Result<Session, StoreError> {
    Ok(serde_json::from_str(record)?)
}

fn encode(session: &Session) -> Result<String, StoreError> {
    Ok(serde_json::to_string(session)?)
}

impl SessionStore for MemoryStore {
    fn insert(&self, session: &Session) -> Result<(), StoreError> {
        let record = encode(session)?;
        let mut records = self.records.lock();
        if records.contains_key(&session.id) {
            return Err(StoreError::AlreadyExists(session.id.clone()));
        }
        records.insert(session.id.clone(), record);
        Ok(())
    }

    fn load(&self, id: &str) -> Result<Session, StoreError> {
        let records = self.records.lock();
        let record = records
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        decode(record)
    }

    fn update<T, E, F>(&self, id: &str, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Session) -> Result<T, E>,
        E: From<StoreError>,
    {
        let mut records = self.records.lock();
        let record = records
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;

        let mut session = decode(record)?;
        let out = f(&mut session)?;
        session.updated_at = Utc::now();
        *record = encode(&session)?;

        Ok(out)
    }
}
