//! Local-first storage core for a workout log.
//!
//! Two collections, exercises and the training plans built from them, are
//! owned by repositories that hydrate from a durable key/value store on
//! startup and write the full collection back after every mutation. Plans
//! embed value snapshots of their exercises, so editing or deleting an
//! exercise never rewrites a plan that already contains it.
//!
//! A transient [`SelectionSession`] carries plan-form state between opening
//! the form and committing or cancelling it, and [`Gym`] is the intent
//! surface a frontend drives: read-only snapshots out, one method per user
//! action in.

pub mod error;
pub mod gym;
pub mod ids;
pub mod models;
pub mod repo;
pub mod session;
pub mod store;

pub use error::{Error, Result};
pub use gym::Gym;
pub use models::{Exercise, ExerciseInput, PlanInput, TrainingPlan};
pub use repo::{ExerciseRepository, PlanRepository};
pub use session::SelectionSession;
pub use store::{Store, StoreError};
