//! User-intent surface over the repositories and the active edit session.

use crate::error::{Error, Result};
use crate::models::{Exercise, ExerciseInput, TrainingPlan};
use crate::repo::{ExerciseRepository, PlanRepository};
use crate::session::SelectionSession;
use crate::store::Store;

/// Aggregates both repositories and the optional plan edit session behind
/// the intents a frontend emits.
///
/// The frontend holds read-only snapshots ([`exercises`](Self::exercises),
/// [`plans`](Self::plans), [`session`](Self::session)) and calls one method
/// per user action; every mutation lands in a repository, which writes it
/// through to the store.
pub struct Gym {
    exercises: ExerciseRepository,
    plans: PlanRepository,
    session: Option<SelectionSession>,
}

impl Gym {
    /// Hydrate both repositories from an already-migrated `store`.
    pub fn open(store: Store) -> Self {
        Self {
            exercises: ExerciseRepository::hydrate(store.clone()),
            plans: PlanRepository::hydrate(store),
            session: None,
        }
    }

    /// Open and migrate the store at the platform-default location, then
    /// hydrate from it.
    pub fn open_default() -> Result<Self> {
        let store = Store::open_default()?;
        store.migrate()?;
        Ok(Self::open(store))
    }

    pub fn exercises(&self) -> &ExerciseRepository {
        &self.exercises
    }

    pub fn plans(&self) -> &PlanRepository {
        &self.plans
    }

    /// The active edit session, if a plan form is open.
    pub fn session(&self) -> Option<&SelectionSession> {
        self.session.as_ref()
    }

    pub fn add_exercise(&mut self, input: ExerciseInput) -> Result<Exercise> {
        self.exercises.add(input)
    }

    pub fn update_exercise(&mut self, id: &str, input: ExerciseInput) -> Result<Exercise> {
        self.exercises.update(id, input)
    }

    /// Delete an exercise. Plans keep their embedded copies, and an open
    /// edit session keeps its selected copy until it is toggled off.
    pub fn remove_exercise(&mut self, id: &str) -> Result<()> {
        self.exercises.remove(id)
    }

    pub fn remove_plan(&mut self, id: &str) -> Result<()> {
        self.plans.remove(id)
    }

    /// Open the plan form: blank for creation, prefilled when `plan_id`
    /// names an existing plan. Only one session is ever active; reopening
    /// replaces the previous session's transient state, which is how the
    /// form behaves when its open control is pressed again. Asking to edit
    /// a plan that no longer exists reports [`Error::NotFound`] and leaves
    /// any open session untouched.
    pub fn begin_plan(&mut self, plan_id: Option<&str>) -> Result<&SelectionSession> {
        let plan = match plan_id {
            Some(id) => Some(
                self.plans
                    .get(id)
                    .ok_or_else(|| Error::NotFound(id.to_string()))?,
            ),
            None => None,
        };
        let session = SelectionSession::begin(plan);
        Ok(&*self.session.insert(session))
    }

    /// Toggle `id` in the open session's selection, reading the exercise
    /// from the repository when it has to be added. Deselecting works even
    /// for an exercise deleted since it was selected; selecting an unknown
    /// id reports [`Error::NotFound`]. Without an open session this is a
    /// no-op.
    pub fn toggle_exercise(&mut self, id: &str) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        if let Some(copy) = session.selected().iter().find(|e| e.id == id).cloned() {
            session.toggle(&copy);
            return Ok(());
        }
        let exercise = self
            .exercises
            .get(id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        session.toggle(exercise);
        Ok(())
    }

    /// Update the open form's name field. No-op without an open session.
    pub fn set_plan_name(&mut self, name: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            session.set_name(name);
        }
    }

    /// Update the open form's day field. No-op without an open session.
    pub fn set_plan_day(&mut self, day: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            session.set_day(day);
        }
    }

    /// Commit the open session. The session is discarded once the plan has
    /// entered the in-memory collection: on success, and also when only the
    /// durable write failed. A validation or not-found outcome keeps the
    /// session so the form state survives for the caller to fix.
    pub fn commit_plan(&mut self) -> Result<TrainingPlan> {
        let Some(session) = self.session.as_ref() else {
            return Err(Error::Validation("no plan is being edited".to_string()));
        };
        let result = session.commit(&mut self.plans);
        match &result {
            Ok(_) | Err(Error::Store(_)) => self.session = None,
            Err(Error::Validation(_)) | Err(Error::NotFound(_)) => {}
        }
        result
    }

    /// Close the plan form without saving.
    pub fn cancel_plan(&mut self) {
        if let Some(session) = self.session.take() {
            session.cancel();
        }
    }
}
