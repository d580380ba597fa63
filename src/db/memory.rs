use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::Mutex;

use super::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeFields};

/// Insertion-ordered store used in place of MongoDB by the handler tests.
#[derive(Default)]
pub struct MemoryEmployeeStore {
    records: Mutex<Vec<Employee>>,
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.records.lock().await.clone())
    }

    async fn insert(&self, fields: EmployeeFields) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        self.records.lock().await.push(Employee::new(id, fields));
        Ok(id)
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Employee>, AppError> {
        let hex = id.to_hex();
        let records = self.records.lock().await;
        Ok(records.iter().find(|e| e.id == hex).cloned())
    }

    async fn update(&self, id: ObjectId, fields: &EmployeeFields) -> Result<bool, AppError> {
        let hex = id.to_hex();
        let mut records = self.records.lock().await;
        match records.iter_mut().find(|e| e.id == hex) {
            Some(record) => {
                record.name = fields.name.clone();
                record.salary = fields.salary;
                record.age = fields.age;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: ObjectId) -> Result<u64, AppError> {
        let hex = id.to_hex();
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|e| e.id != hex);
        Ok((before - records.len()) as u64)
    }
}

/// Store whose every call fails the way an unreachable server would.
pub struct FailingEmployeeStore {
    pub message: String,
}

impl FailingEmployeeStore {
    fn fail<T>(&self) -> Result<T, AppError> {
        Err(AppError::DatabaseError(self.message.clone()))
    }
}

#[async_trait]
impl EmployeeStore for FailingEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.fail()
    }

    async fn insert(&self, _fields: EmployeeFields) -> Result<ObjectId, AppError> {
        self.fail()
    }

    async fn find(&self, _id: ObjectId) -> Result<Option<Employee>, AppError> {
        self.fail()
    }

    async fn update(&self, _id: ObjectId, _fields: &EmployeeFields) -> Result<bool, AppError> {
        self.fail()
    }

    async fn delete(&self, _id: ObjectId) -> Result<u64, AppError> {
        self.fail()
    }
}

/// Inserts into an in-memory store but cannot read the record back: `find`
/// yields `find_error` when set, otherwise nothing.
#[derive(Default)]
pub struct UnreadableEmployeeStore {
    inner: MemoryEmployeeStore,
    find_error: Option<String>,
}

impl UnreadableEmployeeStore {
    pub fn with_find_error(message: impl Into<String>) -> Self {
        UnreadableEmployeeStore {
            find_error: Some(message.into()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl EmployeeStore for UnreadableEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        self.inner.list().await
    }

    async fn insert(&self, fields: EmployeeFields) -> Result<ObjectId, AppError> {
        self.inner.insert(fields).await
    }

    async fn find(&self, _id: ObjectId) -> Result<Option<Employee>, AppError> {
        match &self.find_error {
            Some(message) => Err(AppError::DatabaseError(message.clone())),
            None => Ok(None),
        }
    }

    async fn update(&self, id: ObjectId, fields: &EmployeeFields) -> Result<bool, AppError> {
        self.inner.update(id, fields).await
    }

    async fn delete(&self, id: ObjectId) -> Result<u64, AppError> {
        self.inner.delete(id).await
    }
}
