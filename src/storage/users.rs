use super::table::TableName;
use crate::error::BenchResult;
use crate::model::User;
use sqlx::PgPool;

/// Fetch the first `limit` rows ordered by id
pub async fn fetch_users(pool: &PgPool, table: &TableName, limit: u32) -> BenchResult<Vec<User>> {
    let sql = format!(
        "SELECT id, name, phone_no FROM {} ORDER BY id LIMIT $1",
        table
    );
    let users = sqlx::query_as::<_, User>(&sql)
        .bind(i64::from(limit))
        .fetch_all(pool)
        .await?;
    Ok(users)
}

pub async fn count_users(pool: &PgPool, table: &TableName) -> BenchResult<i64> {
    let sql = format!("SELECT COUNT(*) FROM {}", table);
    let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(pool).await?;
    Ok(count)
}
