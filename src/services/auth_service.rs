use sqlx::PgPool;
use tracing::info;

use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::{crypto, token};

#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
}

impl AuthService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Checks credentials and issues a signed bearer token. Unknown
    /// usernames and wrong passwords are indistinguishable to the caller.
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, role, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::Unauthorized("Invalid credentials".to_string()))?;

        if !crypto::verify_password(password, &user.password_hash)? {
            return Err(Error::Unauthorized("Invalid credentials".to_string()));
        }

        let config = crate::config::get_config();
        token::issue(
            &user.username,
            &user.role,
            config.jwt_ttl_hours,
            &config.jwt_secret,
        )
    }

    /// Seeds the back-office account on startup when it does not exist yet.
    /// An existing row is left untouched, including its password.
    pub async fn ensure_admin_user(&self, username: &str, password: &str) -> Result<()> {
        let hash = crypto::hash_password(password)?;
        let res = sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, role)
            VALUES ($1, $2, 'admin')
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(username)
        .bind(&hash)
        .execute(&self.pool)
        .await?;

        if res.rows_affected() > 0 {
            info!(username, "Created admin user");
        }
        Ok(())
    }
}
