use std::env;

const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE_NAME: &str = "fiber-hrms";
const DEFAULT_COLLECTION: &str = "employees";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub database_name: String,
    pub collection: String,
    pub bind_address: String,
}

impl Config {
    /// Reads settings from the process environment, falling back to the
    /// compiled-in defaults. Call `dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let setting = |key: &str, default: &str| -> Result<String, String> {
            match lookup(key) {
                Some(value) if value.trim().is_empty() => Err(format!("{} cannot be empty", key)),
                Some(value) => Ok(value),
                None => Ok(default.to_string()),
            }
        };

        Ok(Config {
            database_url: setting("DATABASE_URL", DEFAULT_DATABASE_URL)?,
            database_name: setting("DATABASE_NAME", DEFAULT_DATABASE_NAME)?,
            collection: setting("EMPLOYEE_COLLECTION", DEFAULT_COLLECTION)?,
            bind_address: setting("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?,
        })
    }
}
