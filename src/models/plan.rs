use serde::{Deserialize, Serialize};

use super::Exercise;

/// A named, optionally day-tagged workout definition.
///
/// The embedded exercises are value snapshots taken at the moment the plan
/// was saved. Editing or deleting an exercise later never rewrites a plan
/// that already embedded it; a saved plan is a stable record of what was
/// chosen, not a view over the exercise collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPlan {
    pub id: String,
    pub name: String,
    /// Weekday tag; blank when the plan is not tied to a day.
    pub day: String,
    /// Embedded snapshots of the exercises chosen at save time, in
    /// selection order.
    pub exercises: Vec<Exercise>,
}

/// Input for creating a plan or replacing one wholesale.
///
/// `exercises` carries the snapshots to embed. The repository takes
/// ownership of them, which is what severs any link back to the exercise
/// collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanInput {
    pub name: String,
    pub day: String,
    pub exercises: Vec<Exercise>,
}
