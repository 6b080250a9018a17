//! Round domain model and validation.
//!
//! A stored [`Round`] is always fully valid: every write path runs the
//! whole candidate record through [`validate`] before anything is
//! committed, including the merged result of a partial update.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on creation; immutable thereafter.
pub type RoundId = i64;

/// Number of holes on a full scorecard.
pub const HOLES_PER_ROUND: usize = 18;

/// A stored golf round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    pub id: RoundId,
    pub course: String,
    pub username: String,
    /// One score per hole, hole 1 through 18 in order.
    pub scores: Vec<i64>,
}

/// Wire shape shared by create, replace, and patch requests.
///
/// Every field is optional so a patch can name only the keys it changes;
/// create and replace require all of them via [`validate`]. Score elements
/// must be JSON integers — floats and strings fail deserialization, there
/// is no coercion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoundPayload {
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub scores: Option<Vec<i64>>,
}

impl RoundPayload {
    /// Candidate for a patch: the stored record with only this payload's
    /// present keys overwritten.
    pub fn merged_onto(&self, existing: &Round) -> RoundPayload {
        RoundPayload {
            course: Some(
                self.course
                    .clone()
                    .unwrap_or_else(|| existing.course.clone()),
            ),
            username: Some(
                self.username
                    .clone()
                    .unwrap_or_else(|| existing.username.clone()),
            ),
            scores: Some(
                self.scores
                    .clone()
                    .unwrap_or_else(|| existing.scores.clone()),
            ),
        }
    }
}

/// A complete, validated record minus the store-assigned id.
///
/// Only [`validate`] constructs one, so holding a draft is proof the
/// candidate passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundDraft {
    pub course: String,
    pub username: String,
    pub scores: Vec<i64>,
}

impl RoundDraft {
    pub fn into_round(self, id: RoundId) -> Round {
        Round {
            id,
            course: self.course,
            username: self.username,
            scores: self.scores,
        }
    }
}

/// A single failed validation rule, tagged with the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldError {
    MissingCourse,
    EmptyCourse,
    MissingUsername,
    EmptyUsername,
    MissingScores,
    WrongHoleCount(usize),
}

impl FieldError {
    /// Name of the payload field this error is about.
    pub fn field(self) -> &'static str {
        match self {
            FieldError::MissingCourse | FieldError::EmptyCourse => "course",
            FieldError::MissingUsername | FieldError::EmptyUsername => "username",
            FieldError::MissingScores | FieldError::WrongHoleCount(_) => "scores",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::MissingCourse => write!(f, "course is required"),
            FieldError::EmptyCourse => write!(f, "course must not be empty"),
            FieldError::MissingUsername => write!(f, "username is required"),
            FieldError::EmptyUsername => write!(f, "username must not be empty"),
            FieldError::MissingScores => write!(f, "scores is required"),
            FieldError::WrongHoleCount(n) => write!(
                f,
                "scores must contain exactly {HOLES_PER_ROUND} holes, got {n}"
            ),
        }
    }
}

/// Every rule a candidate failed, ordered and deduplicated so error
/// bodies are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: BTreeSet<FieldError>,
}

impl ValidationError {
    pub fn field_errors(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.errors.iter().copied()
    }

    /// Offending field names, deduplicated, in `course`/`username`/`scores`
    /// order.
    pub fn fields(&self) -> Vec<&'static str> {
        let mut fields: Vec<&'static str> =
            self.errors.iter().map(|e| e.field()).collect();
        fields.dedup();
        fields
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{err}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Check a candidate payload as a complete record.
///
/// Pure and deterministic; reports every failing rule, not just the first.
/// The hole count is a pure count check — score values are not range
/// checked.
pub fn validate(candidate: &RoundPayload) -> Result<RoundDraft, ValidationError> {
    let mut errors = BTreeSet::new();

    let course = match &candidate.course {
        Some(c) if !c.is_empty() => Some(c.clone()),
        Some(_) => {
            errors.insert(FieldError::EmptyCourse);
            None
        }
        None => {
            errors.insert(FieldError::MissingCourse);
            None
        }
    };

    let username = match &candidate.username {
        Some(u) if !u.is_empty() => Some(u.clone()),
        Some(_) => {
            errors.insert(FieldError::EmptyUsername);
            None
        }
        None => {
            errors.insert(FieldError::MissingUsername);
            None
        }
    };

    let scores = match &candidate.scores {
        Some(s) if s.len() == HOLES_PER_ROUND => Some(s.clone()),
        Some(s) => {
            errors.insert(FieldError::WrongHoleCount(s.len()));
            None
        }
        None => {
            errors.insert(FieldError::MissingScores);
            None
        }
    };

    match (course, username, scores) {
        (Some(course), Some(username), Some(scores)) => Ok(RoundDraft {
            course,
            username,
            scores,
        }),
        _ => Err(ValidationError { errors }),
    }
}
