//! Explicit registry of open database handles.

use crate::{Error, Reference, Result};

use log::{debug, warn};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier handed out when a database is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegDbId(pub u64);

impl RegDbId {
    /// Returns the next identifier. Identifiers increase monotonically for
    /// the lifetime of the process.
    fn next() -> RegDbId {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);

        RegDbId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for RegDbId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// An open database handle owned by a [`Registry`].
pub trait Database: Send {
    fn id(&self) -> RegDbId;

    /// Connection URL, without credentials.
    fn url(&self) -> String;

    /// Tables and views usable for queries.
    fn maps(&self) -> Result<Vec<String>>;

    fn close(&mut self);
}

/// Owns the databases registered by a caller.
///
/// Databases still registered when the registry is dropped are closed.
#[derive(Default)]
pub struct Registry {
    databases: Vec<Box<dyn Database>>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Opens a database for `reference` and registers it.
    ///
    /// `open` receives the identifier the database must report from
    /// [`Database::id`].
    pub fn register<F>(&mut self, reference: &Reference, open: F) -> Result<RegDbId>
    where
        F: FnOnce(RegDbId, &Reference) -> Result<Box<dyn Database>>,
    {
        let id = RegDbId::next();
        debug!("register {} database {reference} as {id}", reference.driver);

        let database = open(id, reference)?;
        if database.id() != id {
            return Err(Error::from_args(format_args!(
                "database opened for {id} reports id {}",
                database.id()
            )));
        }

        self.databases.push(database);
        Ok(id)
    }

    /// Closes and removes exactly the database registered as `id`.
    pub fn unregister(&mut self, id: RegDbId) -> Result<()> {
        let Some(index) = self.databases.iter().position(|db| db.id() == id) else {
            return Err(Error::database_not_registered(id.0));
        };

        let mut database = self.databases.remove(index);
        debug!("unregister {id} ({})", database.url());
        database.close();

        Ok(())
    }

    pub fn get(&self, id: RegDbId) -> Option<&dyn Database> {
        self.databases
            .iter()
            .find(|db| db.id() == id)
            .map(|db| &**db)
    }

    /// Registered identifiers, in registration order.
    pub fn ids(&self) -> Vec<RegDbId> {
        self.databases.iter().map(|db| db.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.databases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.databases.is_empty()
    }

    /// Maps of every registered database.
    ///
    /// Databases failing to list their maps are skipped.
    pub fn maps(&self) -> Vec<String> {
        let mut maps = vec![];

        for database in &self.databases {
            match database.maps() {
                Ok(found) => maps.extend(found),
                Err(err) => warn!("skipping maps of {}: {err}", database.url()),
            }
        }

        maps
    }
}

impl Drop for Registry {
    fn drop(&mut self) {
        for database in &mut self.databases {
            debug!("close {} on drop", database.id());
            database.close();
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("databases", &self.ids())
            .finish()
    }
}
