//! Fill-in-the-blank quiz endpoints

use axum::{extract::State, Extension, Json};

use crate::error::Result;
use crate::models::*;
use crate::routes::auth::AuthenticatedAccount;
use crate::AppState;
use journal_core::{check_answer, pick_random, render_blank, QuizEntry};

/// GET /api/quiz/next
///
/// Draws one random entry from the to_learn and starred words. Each
/// example is an equally likely outcome, so words with more examples come
/// up proportionally more often. Returns a null entry when there is
/// nothing to practice.
pub async fn next(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedAccount>,
) -> Result<Json<QuizNextResponse>> {
    let rows = state.db.get_quiz_candidates(auth.account_id).await?;
    let words: Vec<WordEntry> = rows.iter().map(|w| w.to_api_word()).collect();

    let entry = pick_random(&words, &mut rand::thread_rng());

    Ok(Json(QuizNextResponse {
        entry: entry.map(|e| QuizPrompt {
            prompt: render_blank(&e),
            word: e.word,
            definition: e.definition,
            sentence: e.sentence,
            answer: e.answer,
        }),
    }))
}

/// POST /api/quiz/check
///
/// Judges a typed answer: trimmed, lowercased, exact equality. The
/// expected answer falls back to the word itself when the entry carried
/// no located answer.
pub async fn check(Json(payload): Json<QuizCheckRequest>) -> Result<Json<QuizCheckResponse>> {
    let entry = QuizEntry {
        word: payload.word,
        sentence: String::new(),
        answer: payload.answer.unwrap_or_default(),
        definition: String::new(),
    };

    let correct = check_answer(&entry, &payload.input);
    let expected = if entry.answer.is_empty() {
        entry.word
    } else {
        entry.answer
    };

    Ok(Json(QuizCheckResponse { correct, expected }))
}
