//! Token counting for LLM context budgeting
//!
//! Uses tiktoken encodings (cl100k_base by default) and falls back to a
//! character heuristic when an encoding cannot be loaded.

use once_cell::sync::Lazy;
use std::fmt;
use std::str::FromStr;
use tiktoken_rs::{cl100k_base, o200k_base, CoreBPE};
use tracing::debug;

/// Supported token encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenModel {
    /// cl100k_base (GPT-4, GPT-3.5, also a fair approximation for Claude)
    #[default]
    Cl100k,
    /// o200k_base (GPT-4o)
    O200k,
    /// Character-count estimate, no BPE encoding
    Heuristic,
}

impl TokenModel {
    fn bpe(&self) -> Option<&'static CoreBPE> {
        let loaded = match self {
            TokenModel::Cl100k => &*CL100K_BPE,
            TokenModel::O200k => &*O200K_BPE,
            TokenModel::Heuristic => return None,
        };
        match loaded {
            Ok(bpe) => Some(bpe),
            Err(e) => {
                debug!("Falling back to heuristic token count: {}", e);
                None
            }
        }
    }

    /// Names accepted on the command line
    pub fn available_models() -> &'static [&'static str] {
        &["cl100k", "o200k", "heuristic"]
    }
}

impl fmt::Display for TokenModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenModel::Cl100k => "cl100k",
            TokenModel::O200k => "o200k",
            TokenModel::Heuristic => "heuristic",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for TokenModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cl100k" | "cl100k_base" | "gpt-4" | "claude" => Ok(TokenModel::Cl100k),
            "o200k" | "o200k_base" | "gpt-4o" => Ok(TokenModel::O200k),
            "heuristic" | "fast" => Ok(TokenModel::Heuristic),
            _ => Err(format!(
                "Unknown token model: {}. Available: {}",
                s,
                TokenModel::available_models().join(", ")
            )),
        }
    }
}

static CL100K_BPE: Lazy<Result<CoreBPE, String>> =
    Lazy::new(|| cl100k_base().map_err(|e| format!("Failed to load cl100k_base: {}", e)));

static O200K_BPE: Lazy<Result<CoreBPE, String>> =
    Lazy::new(|| o200k_base().map_err(|e| format!("Failed to load o200k_base: {}", e)));

/// Count tokens in `text` with the given model
pub fn count_tokens(text: &str, model: TokenModel) -> usize {
    if text.is_empty() {
        return 0;
    }

    match model.bpe() {
        Some(bpe) => bpe.encode_with_special_tokens(text).len(),
        None => estimate_tokens_heuristic(text),
    }
}

/// Roughly four ASCII characters per token, two per non-ASCII character
pub fn estimate_tokens_heuristic(text: &str) -> usize {
    let (ascii, other) = text.chars().fold((0usize, 0usize), |(a, o), c| {
        if c.is_ascii() {
            (a + 1, o)
        } else {
            (a, o + 1)
        }
    });
    ascii.div_ceil(4) + other.div_ceil(2)
}
