use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use super::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeDocument, EmployeeFields};

#[derive(Clone)]
pub struct MongoEmployeeStore {
    collection: Collection<EmployeeDocument>,
}

impl MongoEmployeeStore {
    pub fn new(db: &Database, collection: &str) -> Self {
        MongoEmployeeStore {
            collection: db.collection(collection),
        }
    }
}

#[async_trait]
impl EmployeeStore for MongoEmployeeStore {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<EmployeeDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Employee::from).collect())
    }

    async fn insert(&self, fields: EmployeeFields) -> Result<ObjectId, AppError> {
        let result = self
            .collection
            .insert_one(EmployeeDocument::from(fields))
            .await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalServerError(format!(
                "storage assigned a non-ObjectId identifier: {}",
                result.inserted_id
            ))
        })
    }

    async fn find(&self, id: ObjectId) -> Result<Option<Employee>, AppError> {
        let found = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(found.map(Employee::from))
    }

    async fn update(&self, id: ObjectId, fields: &EmployeeFields) -> Result<bool, AppError> {
        let result = self
            .collection
            .update_one(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "name": fields.name.as_str(),
                        "salary": fields.salary,
                        "age": fields.age,
                    }
                },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: ObjectId) -> Result<u64, AppError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}
