mod errors;
mod routes;
mod services;
mod setup;
mod utils;

use dotenv::dotenv;
use setup::{setup_api_router, setup_database, setup_email_service};

#[tokio::main]
async fn main() -> surrealdb::Result<()> {
    dotenv().ok();

    let database_layer = setup_database().await?;
    database_layer
        .initialize_schemas(vec![utils::schemas::USER_SCHEMA, utils::schemas::ORDER_SCHEMA])
        .await?;

    let email_layer = setup_email_service();

    let (app, listener) = setup_api_router(database_layer, email_layer).await?;

    println!("Server running on port {}", listener.local_addr().unwrap().port());

    axum::serve(listener, app).await.unwrap();

    Ok(())
}
