pub mod models;

pub use models::{Idea, IdeaFact, IdeaNote, IdeaSource};
