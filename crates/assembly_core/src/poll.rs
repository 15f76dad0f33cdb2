use crate::error::ModelResult;
use crate::input::{build_each, decode_object};
use crate::schema::{PollInput, PollOptionInput, VoteInput};
use serde::Serialize;
use serde_json::Value;

/// One voting round of an assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Poll {
    pub id: Option<i64>,
    pub pollmethod: Option<String>,
    pub description: String,
    pub published: bool,
    pub options: Vec<PollOption>,
    pub votesvalid: Option<f64>,
    pub votesinvalid: Option<f64>,
    pub votescast: Option<f64>,
    pub has_votes: bool,
    pub assignment_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PollOption {
    pub id: Option<i64>,
    pub candidate_id: Option<i64>,
    pub is_elected: bool,
    pub votes: Vec<Vote>,
    pub poll_id: Option<i64>,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vote {
    pub weight: f64,
    pub value: String,
}

impl Poll {
    pub const RECORD: &'static str = "poll";

    pub fn from_input(raw: &Value) -> ModelResult<Self> {
        let input: PollInput = decode_object(raw, Self::RECORD)?;
        Ok(Self {
            options: build_each("options", input.options.as_ref(), PollOption::from_input),
            id: input.id,
            pollmethod: input.pollmethod,
            description: input.description.unwrap_or_default(),
            published: input.published.unwrap_or(false),
            votesvalid: input.votesvalid,
            votesinvalid: input.votesinvalid,
            votescast: input.votescast,
            has_votes: input.has_votes.unwrap_or(false),
            assignment_id: input.assignment_id,
        })
    }

    pub fn option_for(&self, candidate_id: i64) -> Option<&PollOption> {
        self.options
            .iter()
            .find(|option| option.candidate_id == Some(candidate_id))
    }
}

impl PollOption {
    pub const RECORD: &'static str = "poll option";

    pub fn from_input(raw: &Value) -> ModelResult<Self> {
        let input: PollOptionInput = decode_object(raw, Self::RECORD)?;
        Ok(Self {
            votes: build_each("votes", input.votes.as_ref(), Vote::from_input),
            id: input.id,
            candidate_id: input.candidate_id,
            is_elected: input.is_elected.unwrap_or(false),
            poll_id: input.poll_id,
            weight: input.weight.unwrap_or(0.0),
        })
    }
}

impl Vote {
    pub const RECORD: &'static str = "vote";

    pub fn from_input(raw: &Value) -> ModelResult<Self> {
        let input: VoteInput = decode_object(raw, Self::RECORD)?;
        Ok(Self {
            weight: input.weight.unwrap_or(0.0),
            value: input.value.unwrap_or_default(),
        })
    }
}
