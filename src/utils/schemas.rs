pub const USER_SCHEMA: &str = r#"
    DEFINE TABLE user SCHEMAFULL;

    DEFINE FIELD name ON TABLE user TYPE string;
    DEFINE FIELD email ON TABLE user TYPE string;
    DEFINE FIELD password_hash ON TABLE user TYPE string;
    DEFINE FIELD naver_id ON TABLE user TYPE option<string>;
    DEFINE FIELD created_at ON TABLE user TYPE datetime;

    DEFINE INDEX user_email ON TABLE user COLUMNS email UNIQUE;
"#;

// ORDER is reserved in SurrealQL, so the table is named orders
pub const ORDER_SCHEMA: &str = r#"
    DEFINE TABLE orders SCHEMAFULL;

    DEFINE FIELD user_email ON TABLE orders TYPE string;
    DEFINE FIELD product_name ON TABLE orders TYPE string;
    DEFINE FIELD amount ON TABLE orders TYPE int;
    DEFINE FIELD payment_status ON TABLE orders TYPE string DEFAULT "pending";
    DEFINE FIELD order_date ON TABLE orders TYPE datetime;
"#;
