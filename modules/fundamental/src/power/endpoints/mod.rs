#[cfg(test)]
mod test;

use crate::{
    endpoints::entity_id,
    power::{
        model::{PowerSummary, PowerUpdate},
        service::PowerService,
    },
    Error,
};
use actix_web::{delete, get, patch, web, HttpResponse, Responder};
use heroes_common::db::Database;

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig, db: Database) {
    let service = PowerService::new(db);
    config
        .app_data(web::Data::new(service))
        .service(all)
        .service(get)
        .service(update)
        .service(delete);
}

#[utoipa::path(
    tag = "power",
    operation_id = "listPowers",
    responses(
        (status = 200, description = "All powers", body = Vec<PowerSummary>),
    ),
)]
#[get("/powers")]
/// List powers
pub async fn all(state: web::Data<PowerService>) -> Result<impl Responder, Error> {
    Ok(HttpResponse::Ok().json(state.fetch_powers().await?))
}

#[utoipa::path(
    tag = "power",
    operation_id = "getPower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 200, description = "Matching power", body = PowerSummary),
        (status = 404, description = "Matching power not found"),
    ),
)]
#[get("/powers/{id}")]
/// Retrieve a power
pub async fn get(
    state: web::Data<PowerService>,
    id: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let fetched = state
        .fetch_power(entity_id(*id, "Power")?)
        .await?
        .ok_or(Error::NotFound("Power"))?;

    Ok(HttpResponse::Ok().json(fetched))
}

#[utoipa::path(
    tag = "power",
    operation_id = "updatePower",
    request_body = PowerUpdate,
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 200, description = "The updated power", body = PowerSummary),
        (status = 400, description = "The request was not JSON, or the description is shorter than 20 characters"),
        (status = 404, description = "Matching power not found"),
    ),
)]
#[patch("/powers/{id}")]
/// Change the description of a power
pub async fn update(
    state: web::Data<PowerService>,
    id: web::Path<i64>,
    update: web::Json<PowerUpdate>,
) -> Result<impl Responder, Error> {
    let updated = state
        .update_description(entity_id(*id, "Power")?, update.into_inner())
        .await?
        .ok_or(Error::NotFound("Power"))?;

    Ok(HttpResponse::Ok().json(updated))
}

#[utoipa::path(
    tag = "power",
    operation_id = "deletePower",
    params(
        ("id", Path, description = "ID of the power")
    ),
    responses(
        (status = 204, description = "The power and its links to heroes were deleted"),
        (status = 404, description = "Matching power not found"),
    ),
)]
#[delete("/powers/{id}")]
/// Delete a power
pub async fn delete(
    state: web::Data<PowerService>,
    id: web::Path<i64>,
) -> Result<impl Responder, Error> {
    match state.delete_power(entity_id(*id, "Power")?).await? {
        0 => Err(Error::NotFound("Power")),
        _ => Ok(HttpResponse::NoContent().finish()),
    }
}
