use serde::{Deserialize, Serialize};

/// A single named movement with set, rep and weight parameters.
///
/// `sets`, `reps` and `weight` are free-form text, never parsed as numbers:
/// entries like "8-10" or "bodyweight" are valid. Blank-after-trim fields
/// are rejected when an exercise is created or edited; content already in
/// the store is trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
}

/// Input for creating an exercise or replacing one wholesale.
///
/// Edits replace all mutable fields at once (the id is preserved), so the
/// same input serves both operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseInput {
    pub name: String,
    pub sets: String,
    pub reps: String,
    pub weight: String,
}
