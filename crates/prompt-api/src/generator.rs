//! # Prompt Matcher
//!
//! Maps a prompt to the one API shape this service knows how to serve. There is no language
//! understanding here: the prompt matches when it mentions both `POST /orders` and
//! `GET /orders` (any case, any whitespace between verb and path), and the result is always
//! the same static document.

use crate::model::{GeneratedSpec, RuntimeDescriptor, SpecDocument};
use once_cell::sync::Lazy;
use regex::Regex;

static CREATE_ORDERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)POST\s*/orders").expect("create pattern is valid"));
static GET_ORDERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)GET\s*/orders").expect("get pattern is valid"));

/// The prompt did not describe a supported API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Prompt not recognized. Expected POST /orders and GET /orders/{{id}}.")]
pub struct UnrecognizedPrompt;

/// Matches `prompt` against the Orders API shape.
///
/// Pure and idempotent: the same prompt always yields the same result.
pub fn generate_from_prompt(prompt: &str) -> Result<GeneratedSpec, UnrecognizedPrompt> {
    if !(CREATE_ORDERS.is_match(prompt) && GET_ORDERS.is_match(prompt)) {
        return Err(UnrecognizedPrompt);
    }

    Ok(GeneratedSpec {
        spec: SpecDocument::orders_api(),
        runtime: RuntimeDescriptor::orders_api(),
    })
}
