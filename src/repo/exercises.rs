use crate::error::{Error, Result};
use crate::ids;
use crate::models::{Exercise, ExerciseInput};
use crate::store::{Store, EXERCISES_KEY};

use super::require_non_blank;

/// Owns the exercise collection.
pub struct ExerciseRepository {
    store: Store,
    exercises: Vec<Exercise>,
}

impl ExerciseRepository {
    /// Read the collection out of `store`. A first run or an unreadable
    /// payload yields an empty collection.
    pub fn hydrate(store: Store) -> Self {
        let exercises = store.load(EXERCISES_KEY);
        Self { store, exercises }
    }

    /// All exercises in insertion order. Display ordering (the usual
    /// name sort) is the consumer's concern, not a guarantee made here.
    pub fn list(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    /// Append a new exercise with a fresh id and persist the collection.
    /// Any of the four fields blank after trimming is a validation error
    /// and nothing is changed.
    pub fn add(&mut self, input: ExerciseInput) -> Result<Exercise> {
        validate(&input)?;
        let exercise = Exercise {
            id: ids::next_id(),
            name: input.name,
            sets: input.sets,
            reps: input.reps,
            weight: input.weight,
        };
        self.exercises.push(exercise.clone());
        tracing::debug!("Added exercise {} ({})", exercise.id, exercise.name);
        self.persist()?;
        Ok(exercise)
    }

    /// Replace the mutable fields of the exercise with `id`, preserving the
    /// id and its position in the collection.
    pub fn update(&mut self, id: &str, input: ExerciseInput) -> Result<Exercise> {
        validate(&input)?;
        let entry = self
            .exercises
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        entry.name = input.name;
        entry.sets = input.sets;
        entry.reps = input.reps;
        entry.weight = input.weight;
        let updated = entry.clone();
        tracing::debug!("Updated exercise {}", id);
        self.persist()?;
        Ok(updated)
    }

    /// Remove the exercise with `id`. An unknown id is not an error and
    /// triggers no write. Plans that embedded a copy of the exercise are
    /// left untouched.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.exercises.len();
        self.exercises.retain(|e| e.id != id);
        if self.exercises.len() == before {
            return Ok(());
        }
        tracing::debug!("Removed exercise {}", id);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        self.store.save(EXERCISES_KEY, &self.exercises)?;
        Ok(())
    }
}

fn validate(input: &ExerciseInput) -> Result<()> {
    require_non_blank("name", &input.name)?;
    require_non_blank("sets", &input.sets)?;
    require_non_blank("reps", &input.reps)?;
    require_non_blank("weight", &input.weight)
}
