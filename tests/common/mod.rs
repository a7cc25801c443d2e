use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::Method;
use actix_web::middleware::NormalizePath;
use actix_web::test::TestRequest;
use actix_web::web::Data;
use actix_web::App;
use serde_json::Value;
use std::net::SocketAddr;

use hrms_lite::config::Config;
use hrms_lite::db::Store;
use hrms_lite::routes;

/// Fresh in-memory store, optionally loaded with the sample rows.
pub async fn store(seeded: bool) -> Store {
    let store = Store::in_memory().await.expect("in-memory store");
    if seeded {
        store.seed_sample_data().await.expect("sample data");
    }
    store
}

/// Mirrors the application built in `main.rs`, minus the Swagger UI.
pub fn build_app(
    store: Store,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = Config::default();

    App::new()
        .wrap(NormalizePath::trim())
        .wrap(routes::build_cors(&config))
        .app_data(Data::new(store))
        .configure(|cfg| routes::configure(cfg, config))
}

// The rate limiter keys on the peer address, so every request needs one.
fn peer() -> SocketAddr {
    "127.0.0.1:40000".parse().unwrap()
}

pub fn get(uri: &str) -> TestRequest {
    TestRequest::get().uri(uri).peer_addr(peer())
}

pub fn delete(uri: &str) -> TestRequest {
    TestRequest::delete().uri(uri).peer_addr(peer())
}

pub fn preflight(uri: &str, origin: &str) -> TestRequest {
    TestRequest::default()
        .method(Method::OPTIONS)
        .uri(uri)
        .peer_addr(peer())
        .insert_header(("Origin", origin))
        .insert_header(("Access-Control-Request-Method", "POST"))
        .insert_header(("Access-Control-Request-Headers", "content-type"))
}

pub fn post_json(uri: &str, body: Value) -> TestRequest {
    TestRequest::post().uri(uri).peer_addr(peer()).set_json(body)
}
