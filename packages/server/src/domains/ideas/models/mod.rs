pub mod idea;
pub mod research;

pub use idea::Idea;
pub use research::{IdeaFact, IdeaNote, IdeaSource};
