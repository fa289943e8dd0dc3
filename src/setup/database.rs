use std::env;

use crate::services::database::DatabaseLayer;

pub async fn setup_database() -> surrealdb::Result<DatabaseLayer> {
    DatabaseLayer::new(
        env::var("DATABASE_USER").unwrap_or_else(|_| String::from("root")),
        env::var("DATABASE_PASS").unwrap_or_else(|_| String::from("root")),
        env::var("DATABASE_URL").unwrap_or_else(|_| String::from("127.0.0.1:8000")),
        env::var("DATABASE_NS").unwrap_or_else(|_| String::from("mapjun")),
        env::var("DATABASE_DB").unwrap_or_else(|_| String::from("site")),
    )
    .await
}
