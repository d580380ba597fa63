use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Deserializer, Serialize};

/// Employee as it travels over the wire. `id` is the hex form of the ObjectId.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

/// Request body for create and update. Omitted or null fields take their zero
/// value; unknown fields, `id` included, are dropped.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EmployeeFields {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub salary: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub age: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Stored document shape in the employee collection.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EmployeeDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub age: f64,
}

impl Employee {
    pub fn new(id: ObjectId, fields: EmployeeFields) -> Self {
        Employee {
            id: id.to_hex(),
            name: fields.name,
            salary: fields.salary,
            age: fields.age,
        }
    }
}

impl From<EmployeeFields> for EmployeeDocument {
    fn from(fields: EmployeeFields) -> Self {
        EmployeeDocument {
            id: None,
            name: fields.name,
            salary: fields.salary,
            age: fields.age,
        }
    }
}

impl From<EmployeeDocument> for Employee {
    fn from(doc: EmployeeDocument) -> Self {
        Employee {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: doc.name,
            salary: doc.salary,
            age: doc.age,
        }
    }
}
