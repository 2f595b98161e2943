// Apply the initial schema and seed the database with the demo dataset

use anyhow::Context;
use sqlx::PgPool;
use tracing::info;

use askforge_common::{hash_password, Config};

const SCHEMA: &str = include_str!("../../../../db/schema.sql");

/// Shared demo password for every seeded user
const SEED_PASSWORD: &str = "Password123!";

const USERS: &[(&str, &str, &str)] = &[
    ("John", "Doe", "john.doe@example.com"),
    ("Jane", "Smith", "jane.smith@example.com"),
    ("Mike", "Johnson", "mike.j@example.com"),
    ("Sarah", "Williams", "sarah.w@example.com"),
    ("David", "Brown", "david.b@example.com"),
];

/// (title, description, index into USERS)
const QUESTIONS: &[(&str, &str, usize)] = &[
    (
        "How do I implement centralized error handling in axum?",
        "I am building a REST API and want every failure to produce the same response shape. What is the idiomatic way to route all errors through one formatter?",
        0,
    ),
    (
        "What is the difference between spawning tasks and awaiting futures?",
        "I am confused about when to use tokio::spawn versus simply awaiting. Can someone explain the differences and when to use each?",
        1,
    ),
    (
        "How to secure JWT tokens in a Rust backend?",
        "What are the best practices for issuing and validating JWT tokens in an axum application? Where should the signing secret live?",
        2,
    ),
    (
        "Best practices for sqlx connection pooling?",
        "Should I share one PgPool across the whole application or create connections per request? What are the performance implications?",
        0,
    ),
    (
        "How to handle multipart uploads in axum?",
        "I need to implement file upload functionality in my API. Which extractor should I use and how do I validate file types and sizes?",
        3,
    ),
    (
        "What is tower middleware?",
        "I keep hearing about tower layers but I do not fully understand what they are or how to compose them. Can someone explain with examples?",
        4,
    ),
    (
        "How to prevent SQL injection with sqlx?",
        "I am writing queries against Postgres. How can I protect against SQL injection attacks? Are bound parameters enough?",
        1,
    ),
    (
        "Difference between PUT and PATCH in REST APIs?",
        "When should I use PUT vs PATCH for updating resources? I have seen both used interchangeably but I think there is a difference.",
        2,
    ),
];

/// (description, index into USERS, index into QUESTIONS)
const ANSWERS: &[(&str, usize, usize)] = &[
    (
        "Define one error enum that knows its status code and implements IntoResponse, then have every handler return Result with that error. One terminal layer can rewrite and log every failure.",
        1,
        0,
    ),
    (
        "Additionally, stash the error in the response extensions so an outer middleware can attach the request method, path, and request id when it logs.",
        2,
        0,
    ),
    (
        "Awaiting runs the future on the current task; tokio::spawn moves it onto a new task that runs concurrently. Spawn when you need work to proceed independently of the current request.",
        0,
        1,
    ),
    (
        "Also note that spawned tasks must be 'static and Send, which is why you clone handles before moving them into the closure.",
        3,
        1,
    ),
    (
        "Keep the secret in an environment variable and load it at startup. Use short expirations, validate on every protected route, and never put sensitive data in the token payload.",
        4,
        2,
    ),
    (
        "Consider the jsonwebtoken crate with HS256 for a single-service deployment; rotate the secret by restarting with a new value.",
        0,
        2,
    ),
    (
        "Use one PgPool for the whole process. It multiplexes connections internally, and cloning the pool is cheap because it is just an Arc.",
        1,
        3,
    ),
    (
        "Use the Multipart extractor. It streams each field, and you can enforce size limits with tower-http's limit layer.",
        2,
        4,
    ),
    (
        "A tower layer wraps a service with extra behavior such as tracing or CORS. Layers compose, so the outermost layer sees the request first and the response last.",
        0,
        5,
    ),
    (
        "Always bind values with $1-style placeholders. sqlx sends parameters out of band, so bound input is never interpreted as SQL.",
        3,
        6,
    ),
    (
        "PUT replaces the entire resource, while PATCH partially updates it. Use PUT when sending the complete updated object, and PATCH when sending only the fields that changed.",
        4,
        7,
    ),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    info!("Applying schema");
    sqlx::raw_sql(SCHEMA).execute(&pool).await?;

    info!("Inserting users");
    let mut user_ids = Vec::with_capacity(USERS.len());
    for &(first_name, last_name, email) in USERS {
        let password_hash = hash_password(SEED_PASSWORD)?;
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(&password_hash)
        .fetch_one(&pool)
        .await?;
        user_ids.push(id);
    }

    info!("Inserting questions");
    let mut question_ids = Vec::with_capacity(QUESTIONS.len());
    for &(title, description, user) in QUESTIONS {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO questions (title, description, user_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(user_ids[user])
        .fetch_one(&pool)
        .await?;
        question_ids.push(id);
    }

    info!("Inserting answers");
    for &(description, user, question) in ANSWERS {
        sqlx::query(
            r#"
            INSERT INTO answers (description, user_id, question_id)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(description)
        .bind(user_ids[user])
        .bind(question_ids[question])
        .execute(&pool)
        .await?;
    }

    info!("Database seeding completed");
    info!("Test credentials: {} / {}", USERS[0].2, SEED_PASSWORD);

    Ok(())
}
