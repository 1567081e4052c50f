//! One-shot commands: drive a single slot once without the TUI.

use std::future::Future;
use std::path::Path;
use std::process::ExitCode;

use crate::api::{ApiClient, ApiError};
use crate::config::Config;
use crate::ui::mvi::Reducer;
use crate::ui::request::{
    AskState, FileSelection, Phase, Question, RequestIntent, RequestOutcome, RequestReducer,
    RequestState, SlotInput, SummarizeState,
};
use crate::upload::SelectedFile;

/// Trigger `state` and feed the call's result back through the reducer.
///
/// A rejected trigger returns the state unchanged without calling `call`.
pub async fn run_slot<I, F, Fut>(state: RequestState<I>, slot: &'static str, call: F) -> RequestState<I>
where
    I: SlotInput,
    F: FnOnce(I) -> Fut,
    Fut: Future<Output = Result<Option<String>, ApiError>>,
{
    let before = state.generation();
    let state = RequestReducer::<I>::reduce(state, RequestIntent::Trigger);
    if state.generation() == before {
        tracing::debug!(slot, "trigger rejected");
        return state;
    }

    let generation = state.generation();
    let outcome = RequestOutcome::from_result(slot, call(state.input().clone()).await);
    RequestReducer::<I>::reduce(
        state,
        RequestIntent::Complete {
            generation,
            outcome,
        },
    )
}

pub async fn run_ask(config: &Config, question: &str) -> anyhow::Result<ExitCode> {
    let state = AskState::with_input(Question::new(question));
    if !state.can_trigger() {
        eprintln!("Question is empty.");
        return Ok(ExitCode::FAILURE);
    }

    let client = ApiClient::new(&config.api)?;
    let state = run_slot(state, "ask", move |question: Question| async move {
        client.ask(question.text()).await
    })
    .await;
    Ok(finish(&state))
}

pub async fn run_summarize(config: &Config, path: &Path) -> anyhow::Result<ExitCode> {
    let file = match SelectedFile::from_path(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let client = ApiClient::new(&config.api)?;
    let state = SummarizeState::with_input(FileSelection::new(file));
    let state = run_slot(state, "summarize", move |selection: FileSelection| async move {
        match selection.file() {
            Some(file) => client.summarize_file(file).await,
            None => Ok(None),
        }
    })
    .await;
    Ok(finish(&state))
}

fn finish<I: SlotInput>(state: &RequestState<I>) -> ExitCode {
    println!("{}", state.display_text());
    if state.phase() == Phase::Failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_question_skips_the_call() {
        let mut called = false;
        let state = AskState::with_input(Question::new("   "));
        let state = run_slot(state, "ask", |_q: Question| {
            called = true;
            async { Ok(None) }
        })
        .await;
        assert!(!called);
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn answer_completes_the_slot() {
        let state = AskState::with_input(Question::new("What time is dinner?"));
        let state = run_slot(state, "ask", |_q: Question| async { Ok(Some("7pm".to_string())) }).await;
        assert_eq!(state.phase(), Phase::Succeeded);
        assert_eq!(state.result(), Some("7pm"));
    }

    #[tokio::test]
    async fn missing_answer_uses_fallback() {
        let state = AskState::with_input(Question::new("anything"));
        let state = run_slot(state, "ask", |_q: Question| async { Ok(None) }).await;
        assert_eq!(state.display_text(), "No answer returned.");
    }
}
