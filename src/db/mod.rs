use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Database};

use crate::config::Config;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeFields};

mod mongo;
#[cfg(test)]
pub mod memory;

pub use mongo::MongoEmployeeStore;

/// Storage operations behind the employee handlers. Each call is one round-trip.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Every record, in whatever order storage yields them.
    async fn list(&self) -> Result<Vec<Employee>, AppError>;

    /// Inserts a new record and returns the identifier storage assigned.
    async fn insert(&self, fields: EmployeeFields) -> Result<ObjectId, AppError>;

    async fn find(&self, id: ObjectId) -> Result<Option<Employee>, AppError>;

    /// Overwrites name, salary and age. Returns `false` if nothing matched `id`.
    async fn update(&self, id: ObjectId, fields: &EmployeeFields) -> Result<bool, AppError>;

    /// Removes at most one record and returns how many were removed.
    async fn delete(&self, id: ObjectId) -> Result<u64, AppError>;
}

/// Connects to MongoDB and pings the server so a bad address fails at startup
/// rather than on the first request.
pub async fn connect(config: &Config) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(&config.database_url).await?;
    let db = client.database(&config.database_name);
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(db)
}
