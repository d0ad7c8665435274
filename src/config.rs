use std::env;

use crate::error::AdminError;

/// Runtime configuration, sourced from the process environment.
///
/// `main` loads a local `.env` file (if present) into the environment before
/// this is read, so values can come from either place.
#[derive(Debug, Clone)]
pub struct Config {
    /// Full MongoDB connection string, expected to embed the target database
    /// name (e.g. `mongodb://host/myappdb?authSource=admin`).
    pub mongo_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AdminError> {
        Ok(Config {
            mongo_url: env::var("MONGO_URL").map_err(|_| AdminError::ConfigMissing)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Use a mutex to ensure tests don't run concurrently and interfere with each other
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_from_env_loads_successfully() {
        let _lock = TEST_MUTEX.lock().unwrap();

        let saved = env::var("MONGO_URL").ok();
        env::set_var("MONGO_URL", "mongodb://localhost:27017/testdb");

        let config = Config::from_env().unwrap();
        assert_eq!(config.mongo_url, "mongodb://localhost:27017/testdb");

        match saved {
            Some(url) => env::set_var("MONGO_URL", url),
            None => env::remove_var("MONGO_URL"),
        }
    }

    #[test]
    fn test_config_missing_mongo_url() {
        let _lock = TEST_MUTEX.lock().unwrap();

        let saved = env::var("MONGO_URL").ok();
        env::remove_var("MONGO_URL");

        let config = Config::from_env();
        assert!(matches!(config, Err(AdminError::ConfigMissing)));

        if let Some(url) = saved {
            env::set_var("MONGO_URL", url);
        }
    }
}
