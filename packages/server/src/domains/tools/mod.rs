pub mod models;

pub use models::{CreateTool, Tool};
