pub mod order;
pub mod user;

use surrealdb::{
    engine::remote::ws::{Client, Ws},
    opt::auth::Root,
    Surreal,
};

#[derive(Clone)]
pub struct DatabaseQuery<'a> {
    pub user: user::UserQuery<'a, Client>,
    pub order: order::OrderQuery<'a, Client>,
}

#[allow(dead_code)]
#[derive(Clone)]
pub struct DatabaseLayer {
    pub username: String,
    password: String,
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub db: Surreal<Client>,
}

impl DatabaseLayer {
    pub async fn new(
        username: String,
        password: String,
        url: String,
        namespace: String,
        database: String,
    ) -> Result<Self, surrealdb::Error> {
        let db = Surreal::new::<Ws>(url.clone()).await?;

        db.signin(Root {
            username: username.as_str(),
            password: password.as_str(),
        })
        .await?;

        db.use_ns(namespace.clone())
            .use_db(database.clone())
            .await?;

        Ok(Self {
            username,
            password,
            url,
            namespace,
            database,
            db,
        })
    }

    pub async fn initialize_schemas(&self, schemas: Vec<&str>) -> Result<(), surrealdb::Error> {
        for schema_query in schemas {
            self.db.query(schema_query).await?;
        }

        Ok(())
    }

    pub fn query(&self) -> DatabaseQuery {
        DatabaseQuery {
            user: user::UserQuery::new(&self.db),
            order: order::OrderQuery::new(&self.db),
        }
    }
}
