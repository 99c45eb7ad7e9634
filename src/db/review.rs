use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

const COLUMNS: &str = "id, product_id, user_id, rating, title, comment, review_date";

pub async fn fetch(pool: &PgPool, id: i64) -> Result<Option<models::Review>, String> {
    tracing::info!("Fetch review {}", id);
    sqlx::query_as::<_, models::Review>(&format!(
        "SELECT {} FROM review WHERE id=$1 LIMIT 1",
        COLUMNS
    ))
    .bind(id)
    .fetch_one(pool)
    .await
    .map(Some)
    .or_else(|err| match err {
        sqlx::Error::RowNotFound => Ok(None),
        e => {
            tracing::error!("Failed to fetch review, error: {:?}", e);
            Err("Could not fetch data".to_string())
        }
    })
}

pub async fn fetch_by_product(pool: &PgPool, product_id: i64) -> Result<Vec<models::Review>, String> {
    let query_span = tracing::info_span!("Fetch reviews by product id.", product_id);
    sqlx::query_as::<_, models::Review>(&format!(
        "SELECT {} FROM review WHERE product_id=$1 ORDER BY id",
        COLUMNS
    ))
    .bind(product_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch reviews of product, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn fetch_by_user(pool: &PgPool, user_id: i64) -> Result<Vec<models::Review>, String> {
    let query_span = tracing::info_span!("Fetch reviews by user id.", user_id);
    sqlx::query_as::<_, models::Review>(&format!(
        "SELECT {} FROM review WHERE user_id=$1 ORDER BY id",
        COLUMNS
    ))
    .bind(user_id)
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|err| {
        tracing::error!("Failed to fetch reviews of user, error: {:?}", err);
        "Could not fetch data".to_string()
    })
}

pub async fn exists(pool: &PgPool, id: i64) -> Result<bool, String> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM review WHERE id=$1)")
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(|err| {
            tracing::error!("Failed to check review existence, error: {:?}", err);
            "Could not fetch data".to_string()
        })
}

/// Returns the row as stored, with the generated id
pub async fn insert(pool: &PgPool, review: models::Review) -> Result<models::Review, String> {
    let query_span = tracing::info_span!("Saving new review into the database");
    sqlx::query_as::<_, models::Review>(&format!(
        r#"
        INSERT INTO review (product_id, user_id, rating, title, comment, review_date)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING {}
        "#,
        COLUMNS
    ))
    .bind(review.product_id)
    .bind(review.user_id)
    .bind(review.rating)
    .bind(&review.title)
    .bind(&review.comment)
    .bind(review.review_date)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute query: {:?}", e);
        "Failed to insert".to_string()
    })
}

/// Insert or overwrite the row with `review.id`
pub async fn save(pool: &PgPool, review: models::Review) -> Result<models::Review, String> {
    let query_span = tracing::info_span!("Saving review", id = review.id);
    sqlx::query_as::<_, models::Review>(&format!(
        r#"
        INSERT INTO review (id, product_id, user_id, rating, title, comment, review_date)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (id) DO UPDATE
        SET
            product_id=EXCLUDED.product_id,
            user_id=EXCLUDED.user_id,
            rating=EXCLUDED.rating,
            title=EXCLUDED.title,
            comment=EXCLUDED.comment,
            review_date=EXCLUDED.review_date
        RETURNING {}
        "#,
        COLUMNS
    ))
    .bind(review.id)
    .bind(review.product_id)
    .bind(review.user_id)
    .bind(review.rating)
    .bind(&review.title)
    .bind(&review.comment)
    .bind(review.review_date)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|saved| {
        tracing::info!("Review {} has been saved", saved.id);
        saved
    })
    .map_err(|err| {
        tracing::error!("Failed to execute query: {:?}", err);
        "Failed to save".to_string()
    })
}

#[tracing::instrument(name = "Delete review.", skip(pool))]
pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, String> {
    tracing::info!("Delete review {}", id);
    sqlx::query::<sqlx::Postgres>("DELETE FROM review WHERE id = $1;")
        .bind(id)
        .execute(pool)
        .await
        .map(|result| result.rows_affected() > 0)
        .map_err(|err| {
            tracing::error!("Failed to delete review: {:?}", err);
            "Failed to delete review".to_string()
        })
}
