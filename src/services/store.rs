use crate::config::DatabaseSettings;
use crate::core::dates::{format_date, parse_date};
use crate::models::{Athlete, AthleteId, NewUser, User, UserForm, UserId, ValidationError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the athlete store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("No user with ID {0}")]
    UserNotFound(UserId),

    #[error("Invalid {table} row {id}: {reason}")]
    InvalidRow {
        table: &'static str,
        id: i64,
        reason: String,
    },

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    first_name: Option<String>,
    last_name: Option<String>,
    gender: Option<String>,
    email: Option<String>,
    birthdate: Option<String>,
    height: Option<f64>,
}

#[derive(Debug, FromRow)]
struct AthleteRow {
    id: i64,
    age: Option<i64>,
    birthdate: Option<String>,
    gender: Option<String>,
    height: Option<f64>,
    weight: Option<i64>,
    name: Option<String>,
    gold_medals: Option<i64>,
    silver_medals: Option<i64>,
    bronze_medals: Option<i64>,
    total_medals: Option<i64>,
    sport: Option<String>,
    country: Option<String>,
}

fn stored_date(
    table: &'static str,
    id: i64,
    text: Option<String>,
) -> Result<chrono::NaiveDate, StoreError> {
    let text = text.ok_or_else(|| StoreError::InvalidRow {
        table,
        id,
        reason: "birthdate is missing".to_string(),
    })?;

    parse_date(&text).map_err(|e| StoreError::InvalidRow {
        table,
        id,
        reason: format!("birthdate '{}': {}", text, e),
    })
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let birthdate = stored_date("user", row.id, row.birthdate)?;
        let height = row.height.ok_or_else(|| StoreError::InvalidRow {
            table: "user",
            id: row.id,
            reason: "height is missing".to_string(),
        })?;

        Ok(User {
            id: row.id,
            first_name: row.first_name.unwrap_or_default(),
            last_name: row.last_name.unwrap_or_default(),
            gender: row.gender.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
            birthdate,
            height,
        })
    }
}

impl TryFrom<AthleteRow> for Athlete {
    type Error = StoreError;

    fn try_from(row: AthleteRow) -> Result<Self, Self::Error> {
        Ok(Athlete {
            id: row.id,
            birthdate: stored_date("athlete", row.id, row.birthdate)?,
            height: row.height,
            age: row.age,
            gender: row.gender,
            weight: row.weight,
            name: row.name,
            gold_medals: row.gold_medals,
            silver_medals: row.silver_medals,
            bronze_medals: row.bronze_medals,
            total_medals: row.total_medals,
            sport: row.sport,
            country: row.country,
        })
    }
}

/// Handle to the SQLite database holding athletes and users
///
/// Created once at startup and passed to every workflow. Call [`Store::close`]
/// before the process exits.
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open (creating if needed) the database file and apply migrations
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        tracing::info!("Opening athlete store at {}", settings.url);

        let options = SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(settings.max_connections.unwrap_or(1))
            .acquire_timeout(Duration::from_secs(
                settings.acquire_timeout_secs.unwrap_or(5),
            ))
            .connect_with(options)
            .await?;

        Self::migrate(pool).await
    }

    /// Private in-memory database, mainly for tests
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
            .await?;

        Self::migrate(pool).await
    }

    async fn migrate(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// Look up a user by identifier
    pub async fn find_user(&self, id: UserId) -> Result<User, StoreError> {
        let query = r#"
            SELECT id, first_name, last_name, gender, email, birthdate, height
            FROM "user"
            WHERE id = ?
        "#;

        let row: Option<UserRow> = sqlx::query_as(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => User::try_from(row),
            None => {
                tracing::debug!("User {} not found", id);
                Err(StoreError::UserNotFound(id))
            }
        }
    }

    /// Every athlete ordered by identifier, optionally only those with a height
    pub async fn all_athletes(&self, require_height: bool) -> Result<Vec<Athlete>, StoreError> {
        let query = r#"
            SELECT id, age, birthdate, gender, height, weight, name,
                   gold_medals, silver_medals, bronze_medals, total_medals,
                   sport, country
            FROM athlete
            WHERE ? = 0 OR height IS NOT NULL
            ORDER BY id
        "#;

        let rows: Vec<AthleteRow> = sqlx::query_as(query)
            .bind(require_height)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            "Loaded {} athletes (require_height: {})",
            rows.len(),
            require_height
        );

        rows.into_iter().map(Athlete::try_from).collect()
    }

    /// Validate a registration form and persist it as a new user
    ///
    /// Nothing is written when validation fails.
    pub async fn save_user(&self, form: &UserForm) -> Result<UserId, StoreError> {
        let user = NewUser::try_from(form)?;
        self.insert_user(&user).await
    }

    async fn insert_user(&self, user: &NewUser) -> Result<UserId, StoreError> {
        let query = r#"
            INSERT INTO "user" (first_name, last_name, gender, email, birthdate, height)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.gender)
            .bind(&user.email)
            .bind(format_date(user.birthdate))
            .bind(user.height)
            .execute(&self.pool)
            .await?;

        let id = result.last_insert_rowid();
        tracing::info!("Saved user {}", id);

        Ok(id)
    }

    /// Insert one athlete reference record
    pub async fn insert_athlete(&self, athlete: &Athlete) -> Result<AthleteId, StoreError> {
        let query = r#"
            INSERT INTO athlete (
                id, age, birthdate, gender, height, weight, name,
                gold_medals, silver_medals, bronze_medals, total_medals,
                sport, country
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(athlete.id)
            .bind(athlete.age)
            .bind(format_date(athlete.birthdate))
            .bind(&athlete.gender)
            .bind(athlete.height)
            .bind(athlete.weight)
            .bind(&athlete.name)
            .bind(athlete.gold_medals)
            .bind(athlete.silver_medals)
            .bind(athlete.bronze_medals)
            .bind(athlete.total_medals)
            .bind(&athlete.sport)
            .bind(&athlete.country)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Inserted athlete {}", athlete.id);

        Ok(athlete.id)
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_birthdate_is_invalid_row() {
        let row = AthleteRow {
            id: 4,
            age: None,
            birthdate: None,
            gender: None,
            height: Some(1.8),
            weight: None,
            name: None,
            gold_medals: None,
            silver_medals: None,
            bronze_medals: None,
            total_medals: None,
            sport: None,
            country: None,
        };

        assert!(matches!(
            Athlete::try_from(row),
            Err(StoreError::InvalidRow { table: "athlete", id: 4, .. })
        ));
    }

    #[test]
    fn test_user_row_conversion() {
        let row = UserRow {
            id: 1,
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            gender: None,
            email: None,
            birthdate: Some("1990-05-10".to_string()),
            height: Some(1.75),
        };

        let user = User::try_from(row).unwrap();
        assert_eq!(user.birthdate.to_string(), "1990-05-10");
        assert_eq!(user.gender, "");
    }
}
