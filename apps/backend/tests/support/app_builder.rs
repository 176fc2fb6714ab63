use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use agency::middleware::{cors_middleware, AccessControlHeaders, RequestTrace, StructuredLogger};
use agency::routes;
use agency::state::app_state::AppState;

/// Type alias for route configuration functions
type RouteConfigFn = Box<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

/// Builder for creating test Actix service instances.
///
/// The middleware stack and fallback match `main.rs`.
pub struct TestAppBuilder {
    state: AppState,
    route_config: RouteConfigFn,
    cors_origins: Vec<String>,
}

impl TestAppBuilder {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            route_config: Box::new(routes::configure),
            cors_origins: Vec::new(),
        }
    }

    /// Replace the production routes with custom ones
    pub fn with_routes<F>(mut self, config_fn: F) -> Self
    where
        F: Fn(&mut web::ServiceConfig) + Send + Sync + 'static,
    {
        self.route_config = Box::new(config_fn);
        self
    }

    pub fn with_cors_origins(mut self, origins: &[&str]) -> Self {
        self.cors_origins = origins.iter().map(|o| o.to_string()).collect();
        self
    }

    pub async fn build(
        self,
    ) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
        let data = web::Data::new(self.state);
        let route_config = self.route_config;

        test::init_service(
            App::new()
                .wrap(cors_middleware(&self.cors_origins))
                .wrap(StructuredLogger)
                .wrap(RequestTrace)
                .wrap(AccessControlHeaders)
                .app_data(data)
                .configure(move |cfg| route_config(cfg))
                .default_service(web::to(routes::not_found)),
        )
        .await
    }
}

pub fn create_test_app(state: AppState) -> TestAppBuilder {
    TestAppBuilder::new(state)
}
