//! User and photo repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use sangam_core::error::{AppError, ErrorKind};
use sangam_core::result::AppResult;
use sangam_core::types::pagination::{PageRequest, PageResponse};
use sangam_entity::user::{CreateUser, Photo, UpdateProfile, User, UserStatus};

/// Repository for user accounts and their photos.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user.
    pub async fn create(&self, user: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash, display_name, gender, date_of_birth) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.display_name)
        .bind(&user.gender)
        .bind(user.date_of_birth)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("Username or email already registered")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// Find an active user by id.
    pub async fn find_active_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1 AND status = 'active'")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// Find a user by username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// Update the mutable profile fields of a user.
    pub async fn update_profile(&self, id: Uuid, update: &UpdateProfile) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET \
                display_name = COALESCE($2, display_name), \
                phone = COALESCE($3, phone), \
                location = COALESCE($4, location), \
                education = COALESCE($5, education), \
                occupation = COALESCE($6, occupation), \
                bio = COALESCE($7, bio), \
                horoscope = COALESCE($8, horoscope), \
                preferences = COALESCE($9, preferences), \
                allow_interests = COALESCE($10, allow_interests), \
                allow_messages = COALESCE($11, allow_messages), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.display_name)
        .bind(&update.phone)
        .bind(&update.location)
        .bind(&update.education)
        .bind(&update.occupation)
        .bind(&update.bio)
        .bind(&update.horoscope)
        .bind(&update.preferences)
        .bind(update.allow_interests)
        .bind(update.allow_messages)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))
    }

    /// Replace a user's password hash.
    pub async fn set_password_hash(&self, id: Uuid, password_hash: &str) -> AppResult<()> {
        sqlx::query("UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update password", e)
            })?;
        Ok(())
    }

    /// Record a successful login.
    pub async fn touch_last_login(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE users SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record login", e))?;
        Ok(())
    }

    /// Change a user's account status (soft delete, suspension).
    pub async fn set_status(&self, id: Uuid, status: UserStatus) -> AppResult<()> {
        sqlx::query("UPDATE users SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set status", e))?;
        Ok(())
    }

    /// Browse active profiles, newest first.
    pub async fn list_active(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE status = 'active'")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;

        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE status = 'active' \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(PageResponse::new(
            users,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    // ── Photos ───────────────────────────────────────────────────

    /// Insert a photo row for a user.
    pub async fn add_photo(
        &self,
        user_id: Uuid,
        path: &str,
        url: &str,
        position: i32,
    ) -> AppResult<Photo> {
        sqlx::query_as::<_, Photo>(
            "INSERT INTO photos (user_id, path, url, position) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(user_id)
        .bind(path)
        .bind(url)
        .bind(position)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add photo", e))
    }

    /// List a user's photos, primary first then by position.
    pub async fn list_photos(&self, user_id: Uuid) -> AppResult<Vec<Photo>> {
        sqlx::query_as::<_, Photo>(
            "SELECT * FROM photos WHERE user_id = $1 \
             ORDER BY is_primary DESC, position ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list photos", e))
    }

    /// Number of photos a user has.
    pub async fn count_photos(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM photos WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count photos", e))
    }

    /// Delete a photo owned by the user, returning the removed row.
    pub async fn delete_photo(&self, photo_id: Uuid, user_id: Uuid) -> AppResult<Option<Photo>> {
        sqlx::query_as::<_, Photo>(
            "DELETE FROM photos WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(photo_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete photo", e))
    }

    /// Mark one photo as primary, clearing any previous primary.
    ///
    /// Both statements run in one transaction so the at-most-one-primary
    /// invariant holds even against the partial unique index.
    pub async fn set_primary_photo(&self, photo_id: Uuid, user_id: Uuid) -> AppResult<Photo> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("UPDATE photos SET is_primary = FALSE WHERE user_id = $1 AND is_primary")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear primary photo", e)
            })?;

        let photo = sqlx::query_as::<_, Photo>(
            "UPDATE photos SET is_primary = TRUE WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(photo_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to set primary photo", e)
        })?
        .ok_or_else(|| AppError::not_found("Photo not found"))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(photo)
    }

    /// Largest position value among a user's photos, if any.
    pub async fn max_photo_position(&self, user_id: Uuid) -> AppResult<Option<i32>> {
        sqlx::query_scalar("SELECT MAX(position) FROM photos WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to read photo positions", e)
            })
    }
}
