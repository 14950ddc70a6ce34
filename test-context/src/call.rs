use actix_http::{Request, StatusCode};
use actix_web::{
    dev::{Service, ServiceResponse},
    Error,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;

/// Calls into an initialized test service, so that tests can take it by reference.
pub trait CallService {
    fn call_service(&self, r: Request) -> impl Future<Output = ServiceResponse>;

    /// Call, expecting success, and decode the body.
    fn call_and_read_body_json<T: DeserializeOwned>(&self, r: Request) -> impl Future<Output = T>;

    /// Call and return the status together with the body as JSON, for checking error responses.
    ///
    /// An empty body is returned as [`Value::Null`].
    fn call_and_read_status_json(&self, r: Request) -> impl Future<Output = (StatusCode, Value)>;
}

impl<S> CallService for S
where
    S: Service<Request, Response = ServiceResponse, Error = Error>,
{
    async fn call_service(&self, r: Request) -> ServiceResponse {
        actix_web::test::call_service(self, r).await
    }

    async fn call_and_read_body_json<T: DeserializeOwned>(&self, r: Request) -> T {
        actix_web::test::call_and_read_body_json(self, r).await
    }

    async fn call_and_read_status_json(&self, r: Request) -> (StatusCode, Value) {
        let response = actix_web::test::call_service(self, r).await;
        let status = response.status();
        let body = actix_web::test::read_body(response).await;

        if body.is_empty() {
            return (status, Value::Null);
        }

        #[allow(clippy::expect_used)]
        let body = serde_json::from_slice(&body).expect("response body must be JSON");
        (status, body)
    }
}
