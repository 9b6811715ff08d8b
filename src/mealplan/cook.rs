use uuid::Uuid;

use super::dto::MealRecord;
use crate::auth::Session;
use crate::error::ApiError;

/// Promoting a planned meal into a cooked-meal row.
///
/// `Idle -> Submitting -> Confirmed | Failed`. A failed submission may be
/// retried by the user (a new `begin`); nothing retries automatically and
/// there is no timeout beyond the gateway request itself.
#[derive(Debug, Clone, PartialEq)]
pub enum CookState {
    Idle,
    Submitting,
    Confirmed { meal_id: Uuid },
    Failed { message: String },
}

/// The row the gateway insert will write, captured at transition time.
#[derive(Debug, Clone)]
pub struct PendingCook {
    pub meal_id: Uuid,
    pub user_id: Uuid,
    pub meal_name: String,
    pub ingredients: Vec<String>,
}

#[derive(Debug)]
pub struct CookFlow {
    state: CookState,
}

impl Default for CookFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CookFlow {
    pub fn new() -> Self {
        Self {
            state: CookState::Idle,
        }
    }

    pub fn state(&self) -> &CookState {
        &self.state
    }

    /// `Idle -> Submitting`. Requires a selected meal and an authenticated
    /// session; missing either refuses the transition with `Precondition`
    /// and the flow stays where it was.
    pub fn begin(
        &mut self,
        selection: Option<&MealRecord>,
        session: Option<&Session>,
    ) -> Result<PendingCook, ApiError> {
        match self.state {
            CookState::Idle | CookState::Failed { .. } => {}
            _ => return Err(ApiError::Precondition("a cook submission is already in flight")),
        }
        let Some(meal) = selection else {
            return Err(ApiError::Precondition("no meal selected"));
        };
        let Some(session) = session else {
            return Err(ApiError::Precondition("no authenticated user"));
        };

        self.state = CookState::Submitting;
        Ok(PendingCook {
            meal_id: Uuid::new_v4(),
            user_id: session.user_id,
            meal_name: meal.name.clone(),
            ingredients: meal.ingredients.clone(),
        })
    }

    /// `Submitting -> Confirmed`. The caller is responsible for triggering
    /// the grocery refetch; this flow only records the outcome.
    pub fn confirm(&mut self, meal_id: Uuid) {
        debug_assert_eq!(self.state, CookState::Submitting);
        self.state = CookState::Confirmed { meal_id };
    }

    /// `Submitting -> Failed`. Surfaces the gateway message as a
    /// `Persistence` error for the caller; the flow can then be retried.
    pub fn fail(&mut self, message: impl Into<String>) -> ApiError {
        debug_assert_eq!(self.state, CookState::Submitting);
        let message = message.into();
        self.state = CookState::Failed {
            message: message.clone(),
        };
        ApiError::Persistence(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast() -> MealRecord {
        MealRecord {
            name: "Toast".into(),
            ingredients: vec!["Bread".into()],
            instructions: "Toast it".into(),
            image_ref: "x".into(),
        }
    }

    fn session() -> Session {
        Session {
            user_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn begin_without_user_is_refused_and_stays_idle() {
        let mut flow = CookFlow::new();
        let meal = toast();
        let err = flow.begin(Some(&meal), None).unwrap_err();
        assert!(matches!(err, ApiError::Precondition(_)));
        assert_eq!(*flow.state(), CookState::Idle);
    }

    #[test]
    fn begin_without_selection_is_refused_and_stays_idle() {
        let mut flow = CookFlow::new();
        let err = flow.begin(None, Some(&session())).unwrap_err();
        assert!(matches!(err, ApiError::Precondition(_)));
        assert_eq!(*flow.state(), CookState::Idle);
    }

    #[test]
    fn successful_submission_confirms() {
        let mut flow = CookFlow::new();
        let meal = toast();
        let s = session();

        let pending = flow.begin(Some(&meal), Some(&s)).expect("begin");
        assert_eq!(*flow.state(), CookState::Submitting);
        assert_eq!(pending.user_id, s.user_id);
        assert_eq!(pending.meal_name, "Toast");
        assert_eq!(pending.ingredients, vec!["Bread"]);

        flow.confirm(pending.meal_id);
        assert_eq!(
            *flow.state(),
            CookState::Confirmed {
                meal_id: pending.meal_id
            }
        );
    }

    #[test]
    fn failed_submission_carries_message_and_can_be_retried() {
        let mut flow = CookFlow::new();
        let meal = toast();
        let s = session();

        flow.begin(Some(&meal), Some(&s)).expect("begin");
        let err = flow.fail("connection reset");
        assert!(matches!(err, ApiError::Persistence(m) if m == "connection reset"));
        assert_eq!(
            *flow.state(),
            CookState::Failed {
                message: "connection reset".into()
            }
        );

        // Retry is a fresh begin; it gets a fresh meal_id.
        let second = flow.begin(Some(&meal), Some(&s)).expect("retry");
        assert_eq!(*flow.state(), CookState::Submitting);
        flow.confirm(second.meal_id);
        assert!(matches!(*flow.state(), CookState::Confirmed { .. }));
    }

    #[test]
    fn begin_is_refused_while_submitting_or_after_confirm() {
        let mut flow = CookFlow::new();
        let meal = toast();
        let s = session();

        let pending = flow.begin(Some(&meal), Some(&s)).expect("begin");
        assert!(flow.begin(Some(&meal), Some(&s)).is_err());

        flow.confirm(pending.meal_id);
        assert!(flow.begin(Some(&meal), Some(&s)).is_err());
    }

    #[test]
    fn two_begins_generate_distinct_meal_ids() {
        let meal = toast();
        let s = session();
        let a = CookFlow::new().begin(Some(&meal), Some(&s)).unwrap();
        let b = CookFlow::new().begin(Some(&meal), Some(&s)).unwrap();
        assert_ne!(a.meal_id, b.meal_id);
    }
}
