use thiserror::Error;

/// Fatal conditions that abort a provisioning run.
///
/// Each variant's message is the exact text shown to the operator; `main`
/// prefixes it with `❌` and exits with status 1.
#[derive(Debug, Error)]
pub enum AdminError {
    #[error("MONGO_URL not found in .env. Add it and retry.")]
    ConfigMissing,

    #[error("Cannot connect to MongoDB: {0}")]
    Connection(mongodb::error::Error),

    #[error("No default database found in MONGO_URL. Please include the database in the URI (e.g. .../myappdb?authSource=admin).")]
    DatabaseUnresolved,

    #[error("{0} is required. Exiting.")]
    InputMissing(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_operator_text() {
        assert_eq!(
            AdminError::ConfigMissing.to_string(),
            "MONGO_URL not found in .env. Add it and retry."
        );
        assert_eq!(
            AdminError::InputMissing("Email").to_string(),
            "Email is required. Exiting."
        );
        assert_eq!(
            AdminError::InputMissing("Password").to_string(),
            "Password is required. Exiting."
        );
        assert!(AdminError::DatabaseUnresolved
            .to_string()
            .contains("authSource=admin"));
    }
}
