use serde::{Deserialize, Serialize};

use crate::business::repo_types::{
    BusinessDetails, Competitor, MarketingGoals, Product, TargetMarket,
};

/// Body for `POST /api/business/profile`. The whole document is taken as
/// submitted; absent sections become their empty defaults (replace, not
/// merge). Also the shape forwarded to the recommendation service.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BusinessProfilePayload {
    #[serde(default)]
    pub business_details: BusinessDetails,
    #[serde(default)]
    pub product_details: Vec<Product>,
    #[serde(default)]
    pub target_market: TargetMarket,
    #[serde(default)]
    pub competitors: Vec<Competitor>,
    #[serde(default)]
    pub marketing_goals: MarketingGoals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_accepts_partial_documents() {
        let payload: BusinessProfilePayload = serde_json::from_str(
            r#"{
                "business_details": {"name": "Acme", "industry": "retail"},
                "competitors": [{"name": "Globex", "platforms": ["google_ads"]}]
            }"#,
        )
        .unwrap();
        assert_eq!(payload.business_details.name.as_deref(), Some("Acme"));
        assert_eq!(payload.competitors.len(), 1);
        assert!(payload.product_details.is_empty());
    }

    #[test]
    fn omitted_sections_resubmit_as_empty_replacements() {
        // The upsert writes every document column from the payload, so a
        // resubmission without competitors clears the stored list instead
        // of keeping it.
        let payload: BusinessProfilePayload =
            serde_json::from_str(r#"{"business_details": {"name": "Acme"}}"#).unwrap();
        assert!(payload.competitors.is_empty());
        assert!(payload.product_details.is_empty());
        assert!(payload.marketing_goals.kpis.is_empty());
    }

    #[test]
    fn payload_rejects_unknown_fields() {
        assert!(serde_json::from_str::<BusinessProfilePayload>(r#"{"user_id": "abc"}"#).is_err());
    }

    #[test]
    fn payload_rejects_mistyped_fields() {
        assert!(
            serde_json::from_str::<BusinessProfilePayload>(r#"{"competitors": "Globex"}"#).is_err()
        );
    }
}
