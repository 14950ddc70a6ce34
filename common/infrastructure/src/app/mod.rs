pub mod http;

use actix_cors::Cors;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{Compress, Logger},
    App, Error,
};
use actix_web_extras::middleware::Condition;

#[derive(Default)]
pub struct AppOptions {
    pub cors: Option<Cors>,
    pub logger: Option<Logger>,
}

/// Build a new HTTP app in a consistent way.
///
/// Middleware added last is executed first, so the wrappers below are to be read from the end
/// to the start.
pub fn new_app(
    options: AppOptions,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        // Handle CORS requests, this might finish early and not pass requests to the next entry
        .wrap(Condition::from_option(options.cors))
        // Compress everything
        .wrap(Compress::default())
        // First log the request, so that we know what happens (can't fail)
        .wrap(Condition::from_option(options.logger))
}
