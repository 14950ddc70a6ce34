
use crate::{
    endpoints::entity_id,
    hero::{
        model::{HeroDetails, HeroSummary},
        service::HeroService,
    },
    Error,
};
use actix_web::{delete, get, web, HttpResponse, Responder};
use heroes_common::db::Database;

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig, db: Database) {
    let service = HeroService::new(db);
    config
        .app_data(web::Data::new(service))
        .service(all)
        .service(get)
        .service(delete);
}

#[utoipa::path(
    tag = "hero",
    operation_id = "listHeroes",
    responses(
        (status = 200, description = "All heroes, without their powers", body = Vec<HeroSummary>),
    ),
)]
#[get("/heroes")]
/// List heroes
pub async fn all(state: web::Data<HeroService>) -> Result<impl Responder, Error> {
    Ok(HttpResponse::Ok().json(state.fetch_heroes().await?))
}

#[utoipa::path(
    tag = "hero",
    operation_id = "getHero",
    params(
        ("id", Path, description = "ID of the hero")
    ),
    responses(
        (status = 200, description = "Matching hero, including its powers", body = HeroDetails),
        (status = 404, description = "Matching hero not found"),
    ),
)]
#[get("/heroes/{id}")]
/// Retrieve a hero with its powers
pub async fn get(
    state: web::Data<HeroService>,
    id: web::Path<i64>,
) -> Result<impl Responder, Error> {
    let fetched = state
        .fetch_hero(entity_id(*id, "Hero")?)
        .await?
        .ok_or(Error::NotFound("Hero"))?;

    Ok(HttpResponse::Ok().json(fetched))
}

#[utoipa::path(
    tag = "hero",
    operation_id = "deleteHero",
    params(
        ("id", Path, description = "ID of the hero")
    ),
    responses(
        (status = 204, description = "The hero and its powers were deleted"),
        (status = 404, description = "Matching hero not found"),
    ),
)]
#[delete("/heroes/{id}")]
/// Delete a hero
pub async fn delete(
    state: web::Data<HeroService>,
    id: web::Path<i64>,
) -> Result<impl Responder, Error> {
    match state.delete_hero(entity_id(*id, "Hero")?).await? {
        0 => Err(Error::NotFound("Hero")),
        _ => Ok(HttpResponse::NoContent().finish()),
    }
}
