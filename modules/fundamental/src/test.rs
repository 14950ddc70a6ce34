use crate::{configure, Config};
use actix_web::App;
use heroes_test_context::{call::CallService, HeroesContext};
use utoipa_actix_web::AppExt;

pub async fn caller(ctx: &HeroesContext) -> anyhow::Result<impl CallService + '_> {
    caller_with(ctx, Config::default()).await
}

pub async fn caller_with(
    ctx: &HeroesContext,
    config: Config,
) -> anyhow::Result<impl CallService + '_> {
    Ok(actix_web::test::init_service(
        App::new()
            .into_utoipa_app()
            .configure(|svc| configure(svc, config, ctx.db.clone()))
            .into_app(),
    )
    .await)
}
