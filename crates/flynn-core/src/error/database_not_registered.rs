use super::Error;

/// Error when a registry id does not name a registered database.
#[derive(Debug)]
pub(super) struct DatabaseNotRegistered {
    id: u64,
}

impl std::fmt::Display for DatabaseNotRegistered {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "database id {} is not registered", self.id)
    }
}

impl Error {
    pub fn database_not_registered(id: u64) -> Error {
        Error::from(super::ErrorKind::DatabaseNotRegistered(
            DatabaseNotRegistered { id },
        ))
    }

    pub fn is_database_not_registered(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::DatabaseNotRegistered(_)))
    }
}
