//! Wire shapes of the records sent by the server.
//!
//! These structs only describe what may arrive; the record types in the sibling
//! modules are built from them. Nested collections are kept as raw JSON here so
//! that a malformed collection can be dropped without failing the whole record.
//! Scalars of the wrong type read as absent.

use crate::input::lenient;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AssignmentInput {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub open_posts: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub phase: Option<i64>,
    #[schemars(with = "Option<Vec<ParticipationInput>>")]
    pub assignment_related_users: Option<Value>,
    pub poll_description_default: Option<Value>, // opaque, shown on new polls
    #[schemars(with = "Option<Vec<PollInput>>")]
    pub polls: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub agenda_item_id: Option<i64>,
    #[schemars(with = "Option<Vec<i64>>")]
    pub tags_id: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ParticipationInput {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub user_id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub elected: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub assignment_id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub weight: Option<f64>, // rank among the candidates, lowest first
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PollInput {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub pollmethod: Option<String>, // e.g. "yn", "yna", "votes"
    #[serde(deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub published: Option<bool>,
    #[schemars(with = "Option<Vec<PollOptionInput>>")]
    pub options: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub votesvalid: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub votesinvalid: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub votescast: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub has_votes: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub assignment_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PollOptionInput {
    #[serde(deserialize_with = "lenient")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub candidate_id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub is_elected: Option<bool>,
    #[schemars(with = "Option<Vec<VoteInput>>")]
    pub votes: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub poll_id: Option<i64>,
    #[serde(deserialize_with = "lenient")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VoteInput {
    #[serde(deserialize_with = "lenient")]
    pub weight: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub value: Option<String>, // "Yes", "No", "Abstain", or a candidate's vote count label
}
