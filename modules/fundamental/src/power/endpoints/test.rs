use crate::power::{model::NewPower, service::PowerService};
use crate::test::{caller, caller_with};
use crate::Config;
use actix_http::StatusCode;
use actix_web::test::TestRequest;
use heroes_test_context::{call::CallService, HeroesContext};
use serde_json::{json, Value};
use test_context::test_context;
use test_log::test;

async fn flight(ctx: &HeroesContext) -> Result<i32, anyhow::Error> {
    let power = PowerService::new(ctx.db.clone())
        .create_power(NewPower {
            name: "flight".into(),
            description: "gives the wielder the ability to fly through the skies".into(),
        })
        .await?;
    Ok(power.id)
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn list(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    let request = TestRequest::get().uri("/powers").to_request();
    let response: Value = app.call_and_read_body_json(request).await;
    assert_eq!(response, json!([]));

    let id = flight(ctx).await?;

    let request = TestRequest::get().uri("/powers").to_request();
    let response: Value = app.call_and_read_body_json(request).await;
    assert_eq!(
        response,
        json!([{
            "id": id,
            "name": "flight",
            "description": "gives the wielder the ability to fly through the skies",
        }])
    );

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn get(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let id = flight(ctx).await?;

    let request = TestRequest::get().uri(&format!("/powers/{id}")).to_request();
    let response: Value = app.call_and_read_body_json(request).await;
    assert_eq!(response["id"], json!(id));
    assert_eq!(response["name"], json!("flight"));
    // no back-reference to heroes
    assert!(response.get("hero_powers").is_none());

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn get_missing(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    for uri in ["/powers/999999", "/powers/99999999999"] {
        let request = TestRequest::get().uri(uri).to_request();
        let response = app.call_and_read_status_json(request).await;
        assert_eq!(
            response,
            (StatusCode::NOT_FOUND, json!({"error": "Power not found"}))
        );
    }

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn patch_description(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let id = flight(ctx).await?;

    let request = TestRequest::patch()
        .uri(&format!("/powers/{id}"))
        .set_json(json!({"description": "stretches really far out!"}))
        .to_request();
    let response: Value = app.call_and_read_body_json(request).await;
    assert_eq!(
        response,
        json!({
            "id": id,
            "name": "flight",
            "description": "stretches really far out!",
        })
    );

    let request = TestRequest::get().uri(&format!("/powers/{id}")).to_request();
    let response: Value = app.call_and_read_body_json(request).await;
    assert_eq!(response["description"], json!("stretches really far out!"));

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn patch_short_description(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let id = flight(ctx).await?;

    let request = TestRequest::patch()
        .uri(&format!("/powers/{id}"))
        .set_json(json!({"description": "too short"}))
        .to_request();
    let response = app.call_and_read_status_json(request).await;
    assert_eq!(
        response,
        (
            StatusCode::BAD_REQUEST,
            json!({"errors": ["validation errors"]})
        )
    );

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn patch_malformed(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let id = flight(ctx).await?;

    for body in [json!({}), json!({"description": 42}), json!([])] {
        let request = TestRequest::patch()
            .uri(&format!("/powers/{id}"))
            .set_json(body)
            .to_request();
        let response = app.call_and_read_status_json(request).await;
        assert_eq!(
            response,
            (
                StatusCode::BAD_REQUEST,
                json!({"errors": ["validation errors"]})
            )
        );
    }

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn patch_missing(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;

    for uri in ["/powers/999999", "/powers/99999999999"] {
        let request = TestRequest::patch()
            .uri(uri)
            .set_json(json!({"description": "stretches really far out!"}))
            .to_request();
        let response = app.call_and_read_status_json(request).await;
        assert_eq!(
            response,
            (StatusCode::NOT_FOUND, json!({"error": "Power not found"}))
        );
    }

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn patch_requires_json(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let id = flight(ctx).await?;

    // checked before looking up the power
    for uri in [format!("/powers/{id}"), "/powers/999999".to_string()] {
        let request = TestRequest::patch()
            .uri(&uri)
            .insert_header(("content-type", "text/plain"))
            .set_payload("description=stretches really far out!")
            .to_request();
        let response = app.call_and_read_status_json(request).await;
        assert_eq!(
            response,
            (
                StatusCode::BAD_REQUEST,
                json!({"error": "Invalid request. Content-Type must be application/json."})
            )
        );
    }

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn patch_over_limit(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller_with(ctx, Config { json_limit: 64 }).await?;
    let id = flight(ctx).await?;

    let request = TestRequest::patch()
        .uri(&format!("/powers/{id}"))
        .set_json(json!({"description": "a".repeat(100)}))
        .to_request();
    let response = app.call_service(request).await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn delete(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let app = caller(ctx).await?;
    let id = flight(ctx).await?;

    let request = TestRequest::delete()
        .uri(&format!("/powers/{id}"))
        .to_request();
    let response = app.call_and_read_status_json(request).await;
    assert_eq!(response, (StatusCode::NO_CONTENT, Value::Null));

    let request = TestRequest::delete()
        .uri(&format!("/powers/{id}"))
        .to_request();
    let response = app.call_and_read_status_json(request).await;
    assert_eq!(
        response,
        (StatusCode::NOT_FOUND, json!({"error": "Power not found"}))
    );

    let request = TestRequest::delete().uri("/powers/99999999999").to_request();
    let response = app.call_and_read_status_json(request).await;
    assert_eq!(
        response,
        (StatusCode::NOT_FOUND, json!({"error": "Power not found"}))
    );

    Ok(())
}
