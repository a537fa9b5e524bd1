use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::users::repo_types::{ApiKeyEntry, CompanyProfile, Subscription, User};

const USER_COLUMNS: &str = "id, email, password_hash, company_name, role, subscription, \
                            profile, api_keys, created_at, last_login";

impl User {
    /// Find a user by (already normalized) email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Create a new user. Role, plan and the nested documents take their
    /// column defaults (role `user`, plan `free`).
    pub async fn create(
        db: &PgPool,
        email: &str,
        password_hash: &str,
        company_name: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, password_hash, company_name) \
             VALUES ($1, $2, $3) \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(email)
        .bind(password_hash)
        .bind(company_name)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Record a successful authentication.
    pub async fn touch_last_login(db: &PgPool, id: Uuid) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET last_login = now() WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Partial profile update. Absent fields keep their stored value.
    /// Role and password are not reachable through this path.
    pub async fn update_profile(
        db: &PgPool,
        id: Uuid,
        company_name: Option<String>,
        subscription: Option<Subscription>,
        profile: Option<CompanyProfile>,
        api_keys: Option<Vec<ApiKeyEntry>>,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(&format!(
            "UPDATE users SET \
                 company_name = COALESCE($2, company_name), \
                 subscription = COALESCE($3, subscription), \
                 profile = COALESCE($4, profile), \
                 api_keys = COALESCE($5, api_keys) \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(company_name)
        .bind(subscription.map(Json))
        .bind(profile.map(Json))
        .bind(api_keys.map(Json))
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Store a new password digest. The only write path for the credential
    /// after registration; callers hash before calling.
    pub async fn set_password(db: &PgPool, id: Uuid, password_hash: &str) -> anyhow::Result<()> {
        sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(db)
            .await?;
        Ok(())
    }

    pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
        ))
        .fetch_all(db)
        .await?;
        Ok(users)
    }
}
