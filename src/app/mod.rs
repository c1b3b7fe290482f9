//! Core application logic: state management, event handling, and action dispatch.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;

use crate::answers::AnswerSource;
use action::Action;
use state::AppState;

/// Perform the side effects the handler asked for.
///
/// The only call site of the answer source outside initialization.
pub fn apply_actions(state: &mut AppState, source: &mut dyn AnswerSource, actions: Vec<Action>) {
    for action in actions {
        match action {
            Action::FetchAnswer => {
                let answer = source.next_answer();
                tracing::debug!("fetched new answer: {}", answer);
                state.set_answer(answer);
            }
            Action::Quit => {
                tracing::info!("quit requested");
                state.should_quit = true;
            }
        }
    }
}
