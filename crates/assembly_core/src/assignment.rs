use crate::error::{ModelError, ModelResult};
use crate::input::{build_each, decode_object, integer};
use crate::participation::Participation;
use crate::poll::Poll;
use crate::registry::{CollectionElement, CollectionRegistry};
use crate::schema::AssignmentInput;
use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::fmt;
use tracing::debug;

/// An agenda item up for election.
///
/// Owns its participations and polls; the agenda item and tags are referenced
/// by id only.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Assignment {
    pub id: Option<i64>,
    pub title: String,
    pub description: String,
    pub open_posts: Option<i64>,
    pub phase: Option<i64>,
    #[serde(rename = "assignment_related_users")]
    pub participations: Vec<Participation>,
    pub poll_description_default: Option<Value>,
    pub polls: Vec<Poll>,
    pub agenda_item_id: Option<i64>,
    #[serde(rename = "tags_id")]
    pub tag_ids: Vec<i64>,
}

impl Assignment {
    pub const COLLECTION: &'static str = "assignments/assignment";

    pub fn from_input(raw: &Value) -> ModelResult<Self> {
        let input: AssignmentInput = decode_object(raw, Self::COLLECTION)?;

        let assignment = Self {
            participations: build_each(
                "assignment_related_users",
                input.assignment_related_users.as_ref(),
                Participation::from_input,
            ),
            polls: build_each("polls", input.polls.as_ref(), Poll::from_input),
            tag_ids: build_each("tags_id", input.tags_id.as_ref(), |value| {
                integer(Self::COLLECTION, value)
            }),
            id: input.id,
            title: input.title.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            open_posts: input.open_posts,
            phase: input.phase,
            poll_description_default: input.poll_description_default,
            agenda_item_id: input.agenda_item_id,
        };

        debug!(
            id = assignment.id,
            participations = assignment.participations.len(),
            polls = assignment.polls.len(),
            "built assignment"
        );
        Ok(assignment)
    }

    /// Replaces the whole record with one built from `input`.
    ///
    /// On error `self` is left as it was.
    pub fn deserialize(&mut self, input: &Value) -> ModelResult<()> {
        *self = Self::from_input(input)?;
        Ok(())
    }

    /// User ids of all candidates, ordered by ascending weight.
    ///
    /// Equal weights keep their input order. The stored participations are not
    /// reordered.
    pub fn candidate_ids(&self) -> Vec<i64> {
        self.ranked_participations()
            .map(|participation| participation.user_id)
            .collect()
    }

    pub fn elected_candidate_ids(&self) -> Vec<i64> {
        self.ranked_participations()
            .filter(|participation| participation.elected)
            .map(|participation| participation.user_id)
            .collect()
    }

    fn ranked_participations(&self) -> impl Iterator<Item = &Participation> {
        let mut ranked: Vec<&Participation> = self.participations.iter().collect();
        ranked.sort_by(|a, b| a.weight.total_cmp(&b.weight));
        ranked.into_iter()
    }

    pub fn register(registry: &mut CollectionRegistry) -> ModelResult<()> {
        registry.register(Self::COLLECTION, build_element)
    }
}

fn build_element(raw: &Value) -> ModelResult<Box<dyn CollectionElement>> {
    Ok(Box::new(Assignment::from_input(raw)?))
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl CollectionElement for Assignment {
    fn collection(&self) -> &'static str {
        Self::COLLECTION
    }

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn to_json(&self) -> ModelResult<Value> {
        serde_json::to_value(self).map_err(|source| ModelError::Malformed {
            record: Self::COLLECTION,
            source,
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
