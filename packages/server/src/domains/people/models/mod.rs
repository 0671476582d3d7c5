pub mod person;

pub use person::{CreatePerson, Person};
