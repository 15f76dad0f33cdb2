use crate::error::{ModelError, ModelResult};
use crate::input::decode_object;
use crate::schema::ParticipationInput;
use serde::Serialize;
use serde_json::Value;

/// A candidate standing for an assignment, ranked by `weight`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Participation {
    pub id: Option<i64>,
    pub user_id: i64,
    pub elected: bool,
    pub assignment_id: Option<i64>,
    pub weight: f64,
}

impl Participation {
    pub const RECORD: &'static str = "assignment related user";

    pub fn from_input(raw: &Value) -> ModelResult<Self> {
        let input: ParticipationInput = decode_object(raw, Self::RECORD)?;
        let user_id = input.user_id.ok_or(ModelError::MissingField {
            record: Self::RECORD,
            field: "user_id",
        })?;
        Ok(Self {
            id: input.id,
            user_id,
            elected: input.elected.unwrap_or(false),
            assignment_id: input.assignment_id,
            weight: input.weight.unwrap_or(0.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fills_defaults_for_missing_fields() {
        let participation = Participation::from_input(&json!({ "user_id": 7 })).unwrap();
        assert_eq!(participation.user_id, 7);
        assert_eq!(participation.weight, 0.0);
        assert!(!participation.elected);
        assert_eq!(participation.id, None);
    }

    #[test]
    fn ignores_unknown_fields() {
        let raw = json!({ "user_id": 3, "weight": 2, "elected": true, "extra": [1, 2] });
        let participation = Participation::from_input(&raw).unwrap();
        assert_eq!(participation.weight, 2.0);
        assert!(participation.elected);
    }

    #[test]
    fn missing_or_wrongly_typed_user_is_an_error() {
        for raw in [json!({ "weight": 1 }), json!({ "user_id": "3", "weight": 1 })] {
            let err = Participation::from_input(&raw).unwrap_err();
            assert!(matches!(err, ModelError::MissingField { field: "user_id", .. }));
        }
    }

    #[test]
    fn wrongly_typed_weight_defaults_to_zero() {
        let participation =
            Participation::from_input(&json!({ "user_id": 4, "weight": "first" })).unwrap();
        assert_eq!(participation.weight, 0.0);
    }
}
