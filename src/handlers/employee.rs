use actix_web::{web, HttpResponse};
use log::info;
use mongodb::bson::oid::ObjectId;
use crate::db::EmployeeStore;
use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeFields};

fn parse_employee_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|err| AppError::BadRequest(err.to_string()))
}

pub async fn get_employees(
    store: web::Data<dyn EmployeeStore>,
) -> Result<HttpResponse, AppError> {
    let employees = store.list().await?;
    Ok(HttpResponse::Ok().json(employees))
}

pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    new_employee: web::Json<EmployeeFields>,
) -> Result<HttpResponse, AppError> {
    let employee_id = store.insert(new_employee.into_inner()).await?;

    // Return what storage actually holds, not the request body.
    let created = store.find(employee_id).await?.ok_or_else(|| {
        AppError::InternalServerError(format!(
            "Employee {} was inserted but could not be read back",
            employee_id
        ))
    })?;

    info!("Created employee {}", created.id);
    Ok(HttpResponse::Created().json(created))
}

pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    employee_id: web::Path<String>,
    updates: web::Json<EmployeeFields>,
) -> Result<HttpResponse, AppError> {
    let employee_id = parse_employee_id(&employee_id.into_inner())?;
    let updates = updates.into_inner();

    if !store.update(employee_id, &updates).await? {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(Employee::new(employee_id, updates)))
}

pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    employee_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee_id = parse_employee_id(&employee_id.into_inner())?;

    if store.delete(employee_id).await? < 1 {
        return Err(AppError::NotFound("Employee not found".to_string()));
    }

    info!("Deleted employee {}", employee_id);
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("record deleted"))
}
