
use crate::{
    hero_power::{
        model::{HeroPowerDetails, NewHeroPower},
        service::HeroPowerService,
    },
    Error,
};
use actix_web::{post, web, HttpResponse, Responder};
use heroes_common::db::Database;

pub fn configure(config: &mut utoipa_actix_web::service_config::ServiceConfig, db: Database) {
    let service = HeroPowerService::new(db);
    config.app_data(web::Data::new(service)).service(create);
}

#[utoipa::path(
    tag = "hero_power",
    operation_id = "createHeroPower",
    request_body = NewHeroPower,
    responses(
        (status = 200, description = "The new link, with hero and power expanded", body = HeroPowerDetails),
        (status = 400, description = "The request was not JSON, the strength is invalid, or the hero or power doesn't exist"),
    ),
)]
#[post("/hero_powers")]
/// Give a hero a power
pub async fn create(
    state: web::Data<HeroPowerService>,
    new: web::Json<NewHeroPower>,
) -> Result<impl Responder, Error> {
    Ok(HttpResponse::Ok().json(state.create_hero_power(new.into_inner()).await?))
}
