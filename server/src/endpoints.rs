use actix_web::{get, HttpResponse, Responder};
use utoipa_actix_web::service_config::ServiceConfig;

pub fn configure(svc: &mut ServiceConfig) {
    svc.service(index)
        .service(utoipa_actix_web::scope("/.well-known/heroes").service(info));
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, utoipa::ToSchema)]
struct Info<'a> {
    name: &'a str,
    version: &'a str,
}

#[utoipa::path(
    tag = "server",
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String),
    ),
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(mime::TEXT_HTML_UTF_8)
        .body("<h1>Code challenge</h1>")
}

#[utoipa::path(
    tag = "server",
    responses(
        (status = 200, description = "Get information", body = inline(Info)),
    ),
)]
#[get("")]
pub async fn info() -> impl Responder {
    HttpResponse::Ok().json(Info {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
