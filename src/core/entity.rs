use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audit envelope shared by every persisted entity.
///
/// `id` and `created_at` are fixed at construction. `updated_at` moves on
/// every successful mutation and `deleted_at` is only ever set by a delete.
/// Timestamps carry microseconds, the precision of a `DATETIME(6)` column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseEntity {
    /// Time-ordered identifier (UUID v7)
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl BaseEntity {
    /// Fresh envelope with a new identifier and `created_at == updated_at`
    pub fn new() -> Self {
        let now = now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Rebuild an envelope from stored values
    pub fn restore(
        id: Uuid,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = now();
    }

    pub fn mark_deleted(&mut self) {
        self.deleted_at = Some(now());
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

impl Default for BaseEntity {
    fn default() -> Self {
        Self::new()
    }
}
