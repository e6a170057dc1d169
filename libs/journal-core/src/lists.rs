//! List membership state machine.
//!
//! The three lists are mutually exclusive: a record's `list` field always
//! holds exactly one of them and every view is a filter over that field.
//! Transitions are pure state computation; persistence and failure handling
//! belong to the storage boundary.

use serde::{Deserialize, Serialize};

use crate::types::WordList;

/// User-requested list transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListAction {
    MarkAsLearnt,
    MoveBackToLearn,
    Star,
    Unstar,
}

/// Compute the new list for `current` under `action`.
///
/// Actions not defined for the current state are no-ops. Starring moves a
/// record out of whichever list it was in; unstarring always routes back to
/// `ToLearn`, never to `Learnt`, even when the record was mastered before
/// being starred.
pub fn apply(current: WordList, action: ListAction) -> WordList {
    match (current, action) {
        (WordList::ToLearn, ListAction::MarkAsLearnt) => WordList::Learnt,
        (WordList::Learnt, ListAction::MoveBackToLearn) => WordList::ToLearn,
        (WordList::ToLearn | WordList::Learnt, ListAction::Star) => WordList::Starred,
        (WordList::Starred, ListAction::Unstar) => WordList::ToLearn,
        (state, _) => state,
    }
}
