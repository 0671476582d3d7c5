pub mod ingestion_event;

pub use ingestion_event::IngestionEvent;
