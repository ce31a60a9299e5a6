//! Tracks entities created during a session for bulk cleanup.
//!
//! # Design
//! The list is append-only during normal operation and fully drained by
//! `cleanup_all`, no matter how many deletion callbacks fail. A failed
//! deletion is logged and skipped so one broken entity cannot strand the
//! rest.

use std::fmt;

use crate::error::ApiError;

/// Kind of resource a tracked identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Pet,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => write!(f, "user"),
            EntityKind::Pet => write!(f, "pet"),
        }
    }
}

/// Identifier of a created resource: users are keyed by name, pets by number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityId {
    Name(String),
    Number(i64),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Name(name) => write!(f, "{name}"),
            EntityId::Number(number) => write!(f, "{number}"),
        }
    }
}

/// A resource created during this session, scheduled for deletion on cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedEntity {
    pub kind: EntityKind,
    pub id: EntityId,
}

/// Insertion-ordered list of created entities.
#[derive(Debug, Default)]
pub struct EntityTracker {
    entities: Vec<TrackedEntity>,
}

impl EntityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity. Callers invoke this only after a confirmed creation.
    pub fn track(&mut self, kind: EntityKind, id: EntityId) {
        self.entities.push(TrackedEntity { kind, id });
    }

    pub fn count(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Tracked entities in insertion order.
    pub fn entities(&self) -> &[TrackedEntity] {
        &self.entities
    }

    /// Whether any tracked entity carries `id`.
    pub fn contains(&self, id: &EntityId) -> bool {
        self.entities.iter().any(|entity| &entity.id == id)
    }

    /// Delete every tracked entity via `delete_fn`, then empty the list.
    ///
    /// Runs in insertion order. A callback error is logged and swallowed so
    /// the remaining entities still get their deletion attempt. The list is
    /// cleared unconditionally, even if every deletion failed.
    pub fn cleanup_all<F>(&mut self, mut delete_fn: F)
    where
        F: FnMut(&TrackedEntity) -> Result<(), ApiError>,
    {
        for entity in &self.entities {
            if let Err(err) = delete_fn(entity) {
                log::warn!("cleanup failed for {} {}: {err}", entity.kind, entity.id);
            }
        }
        self.entities.clear();
    }
}
