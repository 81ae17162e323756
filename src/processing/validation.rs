//! Resume text validation gate
//!
//! Rejects empty, too-short and spam-like text before anything is scored.
//! Rules run in order and the first failure wins.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const MIN_TOKENS: usize = 2;
const MIN_ALPHA_TOKENS: usize = 3;
const SPAM_MIN_TOKENS: usize = 6;
const SPAM_UNIQUE_RATIO: f64 = 0.3;

/// Outcome of [`validate`]: a flag plus the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: String,
}

pub fn validate(text: &str) -> ValidationOutcome {
    match validate_resume_text(text) {
        Ok(()) => ValidationOutcome {
            valid: true,
            message: String::new(),
        },
        Err(e) => ValidationOutcome {
            valid: false,
            message: e.to_string(),
        },
    }
}

pub fn validate_resume_text(text: &str) -> Result<(), ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyResume);
    }

    let lowered = trimmed.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        return Err(ValidationError::InvalidResume);
    }

    let distinct: HashSet<&str> = tokens.iter().copied().collect();
    if distinct.len() <= 1 {
        return Err(ValidationError::RepeatedSpam);
    }

    let alpha_tokens = tokens
        .iter()
        .filter(|token| token.chars().any(char::is_alphabetic))
        .count();
    if alpha_tokens < MIN_ALPHA_TOKENS {
        return Err(ValidationError::InvalidResume);
    }

    let unique_ratio = distinct.len() as f64 / tokens.len() as f64;
    if tokens.len() > SPAM_MIN_TOKENS && unique_ratio < SPAM_UNIQUE_RATIO {
        return Err(ValidationError::RepeatedSpam);
    }

    Ok(())
}
