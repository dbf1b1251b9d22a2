use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use utoipa::ToSchema;

/// Meal fields supplied by the client.
/// Used for: Create request body, and Update (which is a full replace).
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MealContent {
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    /// When the meal was eaten, either an RFC 3339 string or epoch milliseconds
    #[serde(deserialize_with = "timestamp_or_millis")]
    #[schema(value_type = String, example = "2024-01-10T12:00:00Z")]
    pub date: DateTime<Utc>,
}

fn timestamp_or_millis<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Millis(i64),
        Rfc3339(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Millis(ms) => Utc
            .timestamp_millis_opt(ms)
            .single()
            .ok_or_else(|| de::Error::custom("date out of range")),
        Raw::Rfc3339(s) => s
            .parse::<DateTime<Utc>>()
            .map_err(|e| de::Error::custom(format!("invalid date: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_with_date(date: serde_json::Value) -> Result<MealContent, serde_json::Error> {
        serde_json::from_value(serde_json::json!({
            "name": "Breakfast",
            "description": "Oats and fruit",
            "isOnDiet": true,
            "date": date,
        }))
    }

    #[test]
    fn test_date_from_rfc3339_string() {
        let meal = content_with_date("2024-01-10T12:00:00Z".into()).unwrap();
        assert_eq!(meal.date.timestamp_millis(), 1_704_888_000_000);
    }

    #[test]
    fn test_date_from_epoch_millis() {
        let meal = content_with_date(1_704_888_000_000_i64.into()).unwrap();
        assert_eq!(meal.date.timestamp_millis(), 1_704_888_000_000);
    }

    #[test]
    fn test_both_date_forms_decode_to_the_same_instant() {
        let from_string = content_with_date("2024-01-10T12:00:00Z".into()).unwrap();
        let from_millis = content_with_date(1_704_888_000_000_i64.into()).unwrap();
        assert_eq!(from_string.date, from_millis.date);
    }

    #[test]
    fn test_rejects_unparseable_date() {
        assert!(content_with_date("yesterday-ish".into()).is_err());
    }

    #[test]
    fn test_rejects_missing_field() {
        let result: Result<MealContent, _> = serde_json::from_value(serde_json::json!({
            "name": "Lunch",
            "description": "Salad",
            "date": 0,
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_field_names_are_camel_case() {
        // snake_case keys are not accepted on the wire
        let result: Result<MealContent, _> = serde_json::from_value(serde_json::json!({
            "name": "Lunch",
            "description": "Salad",
            "is_on_diet": true,
            "date": 0,
        }));
        assert!(result.is_err());
    }
}
