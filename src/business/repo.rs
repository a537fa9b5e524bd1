use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::business::{dto::BusinessProfilePayload, repo_types::BusinessProfile};

const PROFILE_COLUMNS: &str = "id, user_id, business_details, product_details, target_market, \
                               competitors, marketing_goals, created_at, updated_at";

impl BusinessProfile {
    pub async fn find_by_user(
        db: &PgPool,
        user_id: Uuid,
    ) -> anyhow::Result<Option<BusinessProfile>> {
        let profile = sqlx::query_as::<_, BusinessProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM business_profiles WHERE user_id = $1"
        ))
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(profile)
    }

    /// Create-or-replace keyed by the owning user. A second upsert replaces
    /// every document wholesale; nothing merges.
    pub async fn upsert(
        db: &PgPool,
        user_id: Uuid,
        payload: BusinessProfilePayload,
    ) -> anyhow::Result<BusinessProfile> {
        let profile = sqlx::query_as::<_, BusinessProfile>(&format!(
            "INSERT INTO business_profiles \
                 (user_id, business_details, product_details, target_market, competitors, marketing_goals) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 business_details = EXCLUDED.business_details, \
                 product_details = EXCLUDED.product_details, \
                 target_market = EXCLUDED.target_market, \
                 competitors = EXCLUDED.competitors, \
                 marketing_goals = EXCLUDED.marketing_goals, \
                 updated_at = now() \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(Json(payload.business_details))
        .bind(Json(payload.product_details))
        .bind(Json(payload.target_market))
        .bind(Json(payload.competitors))
        .bind(Json(payload.marketing_goals))
        .fetch_one(db)
        .await?;
        Ok(profile)
    }
}
