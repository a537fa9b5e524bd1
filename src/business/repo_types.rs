use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialMedia {
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub tiktok: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BusinessDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub sub_industry: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub founded: Option<OffsetDateTime>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub social_media: Option<SocialMedia>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Product {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub average_order_value: Option<f64>,
    #[serde(default)]
    pub customer_lifetime_value: Option<f64>,
    #[serde(default)]
    pub margin: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Demographics {
    #[serde(default)]
    pub age_groups: Vec<String>,
    #[serde(default)]
    pub genders: Vec<String>,
    #[serde(default)]
    pub income_levels: Vec<String>,
    #[serde(default)]
    pub education_levels: Vec<String>,
    #[serde(default)]
    pub occupations: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Psychographics {
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub behaviors: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Geography {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default)]
    pub language: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetMarket {
    #[serde(default)]
    pub demographics: Option<Demographics>,
    #[serde(default)]
    pub psychographics: Option<Psychographics>,
    #[serde(default)]
    pub geography: Option<Geography>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Competitor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub estimated_traffic: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketingGoal {
    BrandAwareness,
    LeadGeneration,
    Sales,
    CustomerRetention,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Kpi {
    #[serde(default)]
    pub metric: Option<String>,
    #[serde(default)]
    pub target: Option<f64>,
    #[serde(default)]
    pub timeframe: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Budget {
    #[serde(default)]
    pub monthly: Option<f64>,
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketingGoals {
    #[serde(default)]
    pub primary: Option<MarketingGoal>,
    #[serde(default)]
    pub kpis: Vec<Kpi>,
    #[serde(default)]
    pub budget: Option<Budget>,
}

/// One business profile per owning user; replaced wholesale on upsert.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BusinessProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub business_details: Json<BusinessDetails>,
    pub product_details: Json<Vec<Product>>,
    pub target_market: Json<TargetMarket>,
    pub competitors: Json<Vec<Competitor>>,
    pub marketing_goals: Json<MarketingGoals>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marketing_goal_uses_snake_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&MarketingGoal::BrandAwareness).unwrap(),
            "\"brand_awareness\""
        );
        let goal: MarketingGoal = serde_json::from_str("\"customer_retention\"").unwrap();
        assert_eq!(goal, MarketingGoal::CustomerRetention);
    }

    #[test]
    fn unknown_goal_is_rejected() {
        assert!(serde_json::from_str::<MarketingGoal>("\"world_domination\"").is_err());
    }

    #[test]
    fn empty_documents_deserialize_to_defaults() {
        let market: TargetMarket = serde_json::from_str("{}").unwrap();
        assert!(market.demographics.is_none());
        let goals: MarketingGoals = serde_json::from_str("{}").unwrap();
        assert!(goals.primary.is_none());
        assert!(goals.kpis.is_empty());
    }
}
