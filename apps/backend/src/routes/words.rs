//! Word CRUD and list-transition endpoints

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::routes::auth::AuthenticatedAccount;
use crate::AppState;
use journal_core::{apply, locate, normalize};

/// GET /api/words?list=to_learn|learnt|starred
pub async fn list(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedAccount>,
    Query(query): Query<WordsQuery>,
) -> Result<Json<WordsResponse>> {
    let filter = match query.list.as_deref() {
        Some(s) => Some(
            WordList::from_str(s)
                .ok_or_else(|| ApiError::BadRequest(format!("Unknown list: {}", s)))?,
        ),
        None => None,
    };

    let words = state.db.get_words(auth.account_id, filter).await?;

    Ok(Json(WordsResponse {
        words: words.iter().map(|w| w.to_api_word()).collect(),
    }))
}

/// POST /api/words
///
/// Creates a word in the to_learn list. When no definition is supplied the
/// definition service fills in definition and example sentences; every
/// stored example gets its answer located against the saying.
pub async fn create(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedAccount>,
    Json(payload): Json<CreateWordRequest>,
) -> Result<Json<WordEntry>> {
    let text = payload.text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".to_string()));
    }
    let text = normalize(text);

    let (definition, sentences) = match payload.definition {
        Some(definition) => {
            let definition = definition.trim().to_string();
            if definition.is_empty() {
                return Err(ApiError::BadRequest(
                    "definition must not be empty".to_string(),
                ));
            }
            (definition, payload.examples.unwrap_or_default())
        }
        None => {
            if !state.llm.is_available() {
                return Err(ApiError::BadRequest(
                    "no definition provided and definition service is not configured"
                        .to_string(),
                ));
            }
            let details = state.llm.fetch_word_details(&text).await?;
            (details.definition, details.examples)
        }
    };

    let examples: Vec<Example> = sentences
        .iter()
        .map(|sentence| Example::new(sentence.clone(), locate(sentence, &text)))
        .collect();
    let examples_value =
        serde_json::to_value(&examples).map_err(|e| ApiError::Internal(e.to_string()))?;

    let word = state
        .db
        .insert_word(auth.account_id, &text, &definition, &examples_value)
        .await?;

    tracing::info!("Added word {} for account {}", word.id, auth.account_id);

    Ok(Json(word.to_api_word()))
}

/// DELETE /api/words/:id
pub async fn delete(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedAccount>,
    Path(word_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>> {
    let deleted = state.db.delete_word(auth.account_id, word_id).await?;

    Ok(Json(serde_json::json!({ "deleted": deleted })))
}

/// POST /api/words/:id/list
///
/// Applies the list state machine and persists the single-field update.
/// Undefined (state, action) pairs are no-ops; the write only happens when
/// the list actually changes, and a failed write leaves the prior state.
pub async fn transition(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedAccount>,
    Path(word_id): Path<Uuid>,
    Json(payload): Json<TransitionRequest>,
) -> Result<Json<WordEntry>> {
    let word = state
        .db
        .get_word(auth.account_id, word_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Word not found".to_string()))?;

    let current = WordList::from_str(&word.list).unwrap_or_default();
    let next = apply(current, payload.action);

    if next != current {
        state
            .db
            .update_word_list(auth.account_id, word_id, next)
            .await?;
    }

    let mut api_word = word.to_api_word();
    api_word.list = next;
    Ok(Json(api_word))
}

/// GET /api/words/search?q=
pub async fn search(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedAccount>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<WordsResponse>> {
    let q = query.q.trim();
    if q.is_empty() {
        return Ok(Json(WordsResponse { words: Vec::new() }));
    }

    let words = state.db.search_words(auth.account_id, q).await?;

    Ok(Json(WordsResponse {
        words: words.iter().map(|w| w.to_api_word()).collect(),
    }))
}
