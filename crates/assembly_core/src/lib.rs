pub mod assignment;
pub mod error;
mod input;
pub mod participation;
pub mod poll;
pub mod registry;
pub mod schema;

pub use assignment::Assignment;
pub use error::{ModelError, ModelResult};
pub use participation::Participation;
pub use poll::{Poll, PollOption, Vote};
pub use registry::{CollectionElement, CollectionRegistry, Factory, bootstrap};
