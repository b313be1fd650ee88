use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

impl DomainError {
    /// Whether the error originated in the storage layer (query failed or
    /// database unreachable).
    pub fn is_storage(&self) -> bool {
        matches!(self, DomainError::Storage(_))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Storage(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum InfraError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infra(#[from] InfraError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_errors_become_storage_errors() {
        let err: DomainError = sea_orm::DbErr::Custom("connection refused".into()).into();
        assert!(err.is_storage());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn not_found_message_names_the_key() {
        let err = DomainError::NotFound {
            entity: "Bill",
            field: "connection_id",
            value: "C-1".into(),
        };
        assert_eq!(err.to_string(), "Not found: Bill with connection_id=C-1");
        assert!(!err.is_storage());
    }
}
