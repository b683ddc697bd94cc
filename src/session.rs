//! Transient form state for composing or editing a training plan.

use crate::error::{Error, Result};
use crate::models::{Exercise, PlanInput, TrainingPlan};
use crate::repo::PlanRepository;

/// Per-edit-session state: the name and day fields plus the set of
/// exercises toggled for inclusion.
///
/// A session exists only while a plan form is open and has exactly two exit
/// paths, [`commit`](Self::commit) and [`cancel`](Self::cancel). It is
/// never persisted.
#[derive(Debug, Clone)]
pub struct SelectionSession {
    editing_plan_id: Option<String>,
    name: String,
    day: String,
    selected: Vec<Exercise>,
}

impl SelectionSession {
    /// Start a session. With a plan the form is prefilled for editing and
    /// the plan's embedded snapshots become the initial selection; without
    /// one the form starts blank for creation.
    pub fn begin(plan: Option<&TrainingPlan>) -> Self {
        match plan {
            Some(plan) => Self {
                editing_plan_id: Some(plan.id.clone()),
                name: plan.name.clone(),
                day: plan.day.clone(),
                selected: plan.exercises.clone(),
            },
            None => Self {
                editing_plan_id: None,
                name: String::new(),
                day: String::new(),
                selected: Vec::new(),
            },
        }
    }

    /// The id of the plan being edited, or `None` when composing a new one.
    pub fn editing_plan_id(&self) -> Option<&str> {
        self.editing_plan_id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn set_day(&mut self, day: impl Into<String>) {
        self.day = day.into();
    }

    /// The current selection in toggle order.
    pub fn selected(&self) -> &[Exercise] {
        &self.selected
    }

    /// Flip membership of `exercise` in the selection. Selecting clones the
    /// value in; that clone is what a later commit embeds. Toggling the
    /// same id twice restores the selection it started from.
    pub fn toggle(&mut self, exercise: &Exercise) {
        if let Some(pos) = self.selected.iter().position(|e| e.id == exercise.id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(exercise.clone());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|e| e.id == id)
    }

    /// A session can commit once it has a non-blank name and at least one
    /// selected exercise. `day` may stay blank.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.selected.is_empty()
    }

    /// Write the session into the plan repository: an update when the
    /// session was begun from an existing plan, an add otherwise.
    ///
    /// An invalid session is rejected without touching the repository and
    /// without consuming the form state; callers gate the save control on
    /// [`is_valid`](Self::is_valid) and re-prompt otherwise.
    pub fn commit(&self, plans: &mut PlanRepository) -> Result<TrainingPlan> {
        if !self.is_valid() {
            return Err(Error::Validation(
                "a plan needs a name and at least one exercise".to_string(),
            ));
        }
        let input = PlanInput {
            name: self.name.clone(),
            day: self.day.clone(),
            exercises: self.selected.clone(),
        };
        match &self.editing_plan_id {
            Some(id) => plans.update(id, input),
            None => plans.add(input),
        }
    }

    /// Discard the session without any persistence effect.
    pub fn cancel(self) {}
}
