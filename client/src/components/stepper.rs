//! Horizontal progress through the role sequence.
//!
//! Each role in the sequence is one step. Steps before `current_step` are
//! done, the current one is active (or marked rejected/returned), and the rest
//! are upcoming. A completed application shows every step done.

#[cfg(test)]
#[path = "stepper_test.rs"]
mod stepper_test;

use leptos::prelude::*;
use workflow::{ApplicationStatus, ROLE_SEQUENCE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Done,
    Active,
    Returned,
    Rejected,
    Upcoming,
}

impl StepState {
    fn class(self) -> &'static str {
        match self {
            Self::Done => "stepper__step--done",
            Self::Active => "stepper__step--active",
            Self::Returned => "stepper__step--returned",
            Self::Rejected => "stepper__step--rejected",
            Self::Upcoming => "stepper__step--upcoming",
        }
    }
}

/// State of the step at `index` for an application in `status` at `current_step`.
#[must_use]
pub fn step_state(index: usize, status: ApplicationStatus, current_step: i32) -> StepState {
    if status == ApplicationStatus::Completed {
        return StepState::Done;
    }
    let Ok(current) = usize::try_from(current_step) else {
        return StepState::Upcoming;
    };
    match index.cmp(&current) {
        std::cmp::Ordering::Less => StepState::Done,
        std::cmp::Ordering::Greater => StepState::Upcoming,
        std::cmp::Ordering::Equal => match status {
            ApplicationStatus::Rejected => StepState::Rejected,
            ApplicationStatus::RevisionRequired => StepState::Returned,
            _ => StepState::Active,
        },
    }
}

#[component]
pub fn WorkflowStepper(status: ApplicationStatus, current_step: i32) -> impl IntoView {
    let steps = ROLE_SEQUENCE
        .iter()
        .enumerate()
        .map(|(index, role)| {
            let state = step_state(index, status, current_step);
            view! {
                <li class=format!("stepper__step {}", state.class())>
                    <span class="stepper__index">{index + 1}</span>
                    <span class="stepper__label">{role.label()}</span>
                </li>
            }
        })
        .collect_view();
    view! { <ol class="stepper">{steps}</ol> }
}
