use chrono::Utc;
use serde::{Deserialize, Serialize};
use surrealdb::{
    sql::{Datetime, Thing},
    Connection, Surreal,
};

use crate::utils::crypto::generate_uuid;

// Shape written on signup, the record id is assigned by UserQuery::create
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub naver_id: Option<String>,
    pub created_at: Datetime,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        User {
            name,
            email,
            password_hash,
            naver_id: None,
            created_at: Datetime::from(Utc::now()),
        }
    }
}

// Shape read back from the store, id included
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserRecord {
    pub id: Thing,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub naver_id: Option<String>,
    pub created_at: Datetime,
}

#[derive(Clone)]
pub struct UserQuery<'a, C: Connection> {
    db: &'a Surreal<C>,
}

impl<'a, C: Connection> UserQuery<'a, C> {
    pub(crate) fn new(db: &'a Surreal<C>) -> Self {
        Self { db }
    }
}

impl<'a, C: Connection> UserQuery<'a, C> {
    pub async fn create(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> Result<Option<User>, surrealdb::Error> {
        let id = generate_uuid();
        let new_user = User::new(name, email, password_hash);

        let user: Option<User> = self.db.create(("user", id)).content(new_user).await?;

        Ok(user)
    }

    pub async fn check_if_exists(&self, email: String) -> Result<bool, surrealdb::Error> {
        let query = r#"
            SELECT * FROM user
            WHERE email = $user_email
        "#;

        let mut response: surrealdb::Response =
            self.db.query(query).bind(("user_email", email)).await?;

        let result: Vec<UserRecord> = response.take(0)?;

        Ok(!result.is_empty())
    }

    pub async fn get_by_email(&self, email: String) -> Result<Option<UserRecord>, surrealdb::Error> {
        let query = r#"
            SELECT * FROM user
            WHERE email = $user_email
        "#;

        let mut response: surrealdb::Response =
            self.db.query(query).bind(("user_email", email)).await?;

        let mut result: Vec<UserRecord> = response.take(0)?;

        Ok(result.pop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::engine::local::{Db, Mem};

    use crate::utils::schemas::USER_SCHEMA;

    async fn memory_db() -> Surreal<Db> {
        let db = Surreal::new::<Mem>(()).await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        db.query(USER_SCHEMA).await.unwrap();
        db
    }

    #[tokio::test]
    async fn second_signup_with_same_email_is_detected() {
        let db = memory_db().await;
        let query = UserQuery::new(&db);

        query
            .create(
                String::from("Jun"),
                String::from("jun@example.com"),
                String::from("not-a-real-hash"),
            )
            .await
            .unwrap();

        assert!(query
            .check_if_exists(String::from("jun@example.com"))
            .await
            .unwrap());
        assert!(!query
            .check_if_exists(String::from("other@example.com"))
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn store_rejects_a_second_user_with_the_same_email() {
        let db = memory_db().await;
        let query = UserQuery::new(&db);

        query
            .create(
                String::from("Jun"),
                String::from("jun@example.com"),
                String::from("not-a-real-hash"),
            )
            .await
            .unwrap();

        // The unique email index holds even if the handler's check is raced
        let duplicate = query
            .create(
                String::from("Jun again"),
                String::from("jun@example.com"),
                String::from("another-hash"),
            )
            .await;

        assert!(duplicate.is_err());
    }

    #[tokio::test]
    async fn get_by_email_finds_only_existing_users() {
        let db = memory_db().await;
        let query = UserQuery::new(&db);

        query
            .create(
                String::from("Jun"),
                String::from("jun@example.com"),
                String::from("not-a-real-hash"),
            )
            .await
            .unwrap();

        let found = query
            .get_by_email(String::from("jun@example.com"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.name, "Jun");
        assert_eq!(found.password_hash, "not-a-real-hash");

        let missing = query
            .get_by_email(String::from("nobody@example.com"))
            .await
            .unwrap();

        assert!(missing.is_none());
    }
}
