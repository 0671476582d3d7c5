//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for IngestionEvent entities (raw webhook log rows).
pub struct IngestionEvent;

/// Marker type for Idea entities.
pub struct Idea;

/// Marker type for Person entities.
pub struct Person;

/// Marker type for Tool entities.
pub struct Tool;

/// Marker type for IdeaNote entities (research notes on an idea).
pub struct IdeaNote;

/// Marker type for IdeaSource entities (references attached to an idea).
pub struct IdeaSource;

/// Marker type for IdeaFact entities (fact statements about an idea).
pub struct IdeaFact;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for IngestionEvent entities.
pub type IngestionEventId = Id<IngestionEvent>;

/// Typed ID for Idea entities.
pub type IdeaId = Id<Idea>;

/// Typed ID for Person entities.
pub type PersonId = Id<Person>;

/// Typed ID for Tool entities.
pub type ToolId = Id<Tool>;

/// Typed ID for IdeaNote entities.
pub type IdeaNoteId = Id<IdeaNote>;

/// Typed ID for IdeaSource entities.
pub type IdeaSourceId = Id<IdeaSource>;

/// Typed ID for IdeaFact entities.
pub type IdeaFactId = Id<IdeaFact>;
