use crate::error::{Error, Result};
use crate::ids;
use crate::models::{PlanInput, TrainingPlan};
use crate::store::{Store, TRAINING_PLANS_KEY};

use super::require_non_blank;

/// Owns the training-plan collection.
///
/// Plans embed value snapshots of the exercises chosen at save time. The
/// repository takes ownership of the snapshots carried by [`PlanInput`] and
/// never looks an exercise up again, which is what keeps saved plans stable
/// while the exercise collection changes underneath them.
pub struct PlanRepository {
    store: Store,
    plans: Vec<TrainingPlan>,
}

impl PlanRepository {
    /// Read the collection out of `store`. A first run or an unreadable
    /// payload yields an empty collection.
    pub fn hydrate(store: Store) -> Self {
        let plans = store.load(TRAINING_PLANS_KEY);
        Self { store, plans }
    }

    /// All plans in insertion order.
    pub fn list(&self) -> &[TrainingPlan] {
        &self.plans
    }

    pub fn get(&self, id: &str) -> Option<&TrainingPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    /// Append a new plan with a fresh id and persist the collection. A
    /// blank name or an empty exercise selection is a validation error and
    /// nothing is changed. `day` may be blank.
    pub fn add(&mut self, input: PlanInput) -> Result<TrainingPlan> {
        validate(&input)?;
        let plan = TrainingPlan {
            id: ids::next_id(),
            name: input.name,
            day: input.day,
            exercises: input.exercises,
        };
        self.plans.push(plan.clone());
        tracing::debug!("Added plan {} ({})", plan.id, plan.name);
        self.persist()?;
        Ok(plan)
    }

    /// Replace `name`, `day` and the embedded exercises wholesale,
    /// preserving the id and its position in the collection.
    pub fn update(&mut self, id: &str, input: PlanInput) -> Result<TrainingPlan> {
        validate(&input)?;
        let entry = self
            .plans
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        entry.name = input.name;
        entry.day = input.day;
        entry.exercises = input.exercises;
        let updated = entry.clone();
        tracing::debug!("Updated plan {}", id);
        self.persist()?;
        Ok(updated)
    }

    /// Remove the plan with `id`. An unknown id is not an error and
    /// triggers no write.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.plans.len();
        self.plans.retain(|p| p.id != id);
        if self.plans.len() == before {
            return Ok(());
        }
        tracing::debug!("Removed plan {}", id);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(TRAINING_PLANS_KEY, &self.plans)?;
        Ok(())
    }
}

fn validate(input: &PlanInput) -> Result<()> {
    require_non_blank("name", &input.name)?;
    if input.exercises.is_empty() {
        return Err(Error::Validation(
            "a plan needs at least one exercise".to_string(),
        ));
    }
    Ok(())
}
