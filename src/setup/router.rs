use std::env;

use axum::{Extension, Router};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::{
    routes,
    services::{database::DatabaseLayer, email::EmailLayer},
};

#[derive(Clone)]
pub struct AppState {
    pub jwt_secret: String,
}

pub async fn setup_api_router(
    database_layer: DatabaseLayer,
    email_layer: EmailLayer,
) -> surrealdb::Result<(Router, TcpListener)> {
    let shared_state = AppState {
        jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| {
            println!("JWT secret error");
            String::new()
        }),
    };

    let app = routes::main_router()
        // The site root doubles as the static directory, index.html included
        .fallback_service(ServeDir::new("site"))
        .layer(CorsLayer::permissive())
        .layer(Extension(database_layer))
        .layer(Extension(email_layer))
        .with_state(shared_state);

    let port = env::var("PORT").unwrap_or_else(|_| String::from("3000"));
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await.unwrap();

    Ok((app, listener))
}
