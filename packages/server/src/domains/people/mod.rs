pub mod models;

pub use models::{CreatePerson, Person};
