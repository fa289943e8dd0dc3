use chrono::Utc;
use serde::{Deserialize, Serialize};
use surrealdb::{sql::Datetime, Connection, Surreal};

use crate::utils::crypto::generate_uuid;

// The user is referenced by email only, not by a record link
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Order {
    pub user_email: String,
    pub product_name: String,
    pub amount: u32,
    pub payment_status: String,
    pub order_date: Datetime,
}

impl Order {
    pub fn new(
        user_email: String,
        product_name: String,
        amount: u32,
        payment_status: String,
    ) -> Self {
        Order {
            user_email,
            product_name,
            amount,
            payment_status,
            order_date: Datetime::from(Utc::now()),
        }
    }
}

#[derive(Clone)]
pub struct OrderQuery<'a, C: Connection> {
    db: &'a Surreal<C>,
}

impl<'a, C: Connection> OrderQuery<'a, C> {
    pub(crate) fn new(db: &'a Surreal<C>) -> Self {
        Self { db }
    }
}

impl<'a, C: Connection> OrderQuery<'a, C> {
    // Returns the id of the freshly created order record
    pub async fn create(
        &self,
        user_email: String,
        product_name: String,
        amount: u32,
        payment_status: String,
    ) -> Result<String, surrealdb::Error> {
        let id = generate_uuid();
        let new_order = Order::new(user_email, product_name, amount, payment_status);

        let _order: Option<Order> = self
            .db
            .create(("orders", id.clone()))
            .content(new_order)
            .await?;

        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::engine::local::{Db, Mem};

    use crate::routes::payment::complete::{PRODUCT_AMOUNT, PRODUCT_NAME};
    use crate::utils::schemas::ORDER_SCHEMA;

    async fn memory_db() -> Surreal<Db> {
        let db = Surreal::new::<Mem>(()).await.unwrap();
        db.use_ns("test").use_db("test").await.unwrap();
        db.query(ORDER_SCHEMA).await.unwrap();
        db
    }

    // The payment handler records every order as completed, the store must
    // keep it that way verbatim
    #[tokio::test]
    async fn recorded_order_is_persisted_as_completed() {
        let db = memory_db().await;
        let query = OrderQuery::new(&db);

        let order_id = query
            .create(
                String::from("buyer@example.com"),
                String::from(PRODUCT_NAME),
                PRODUCT_AMOUNT,
                String::from("completed"),
            )
            .await
            .unwrap();

        let order: Option<Order> = db.select(("orders", order_id)).await.unwrap();
        let order = order.unwrap();

        assert_eq!(order.payment_status, "completed");
        assert_eq!(order.user_email, "buyer@example.com");
        assert_eq!(order.product_name, PRODUCT_NAME);
        assert_eq!(order.amount, PRODUCT_AMOUNT);
    }
}
