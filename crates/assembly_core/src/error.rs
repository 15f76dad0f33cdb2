use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid input for {record}: expected {expected}, found {found}")]
    InvalidInput {
        record: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("malformed {record}: {source}")]
    Malformed {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{record} is missing `{field}`")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },
    #[error("invalid element {index} of `{field}`: {source}")]
    Nested {
        field: &'static str,
        index: usize,
        #[source]
        source: Box<ModelError>,
    },
    #[error("no collection registered under `{0}`")]
    UnknownCollection(String),
    #[error("collection `{0}` is already registered")]
    DuplicateCollection(String),
}
