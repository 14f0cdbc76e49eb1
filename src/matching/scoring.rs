use crate::matching::tokenization::{significant_tokens, token_similarity};
use crate::types::{MatchResult, Paragraph};

/// Tunables for [`score`]. Mirrors the scorer-relevant subset of
/// `SyncConfig`.
#[derive(Debug, Clone, Copy)]
pub struct ScoringParams {
    pub min_token_len: usize,
    /// Similarity floor for the edit-distance fallback; below it a spoken
    /// token counts as unmatched.
    pub min_token_similarity: f32,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            min_token_len: 3,
            min_token_similarity: 0.7,
        }
    }
}

/// Scores `spoken_text` against every paragraph and returns the best match.
///
/// Per paragraph, each significant spoken token is matched by exact
/// containment first, then by best normalized edit-distance similarity
/// against any paragraph token. Tokens matched at strictly increasing
/// paragraph positions earn a sequential bonus, rewarding spoken order that
/// agrees with text order:
///
/// `confidence = clamp((match_ratio + sequential_bonus) / 2, 0, 1)`
///
/// Ties keep the earliest paragraph. Complexity is paragraph count x spoken
/// tokens x paragraph tokens in the fallback path; acceptable for short-form
/// speech scripts.
pub fn score(spoken_text: &str, paragraphs: &[Paragraph], params: &ScoringParams) -> MatchResult {
    if spoken_text.trim().is_empty() || paragraphs.is_empty() {
        return MatchResult::none();
    }

    let spoken = significant_tokens(spoken_text, params.min_token_len);
    if spoken.is_empty() {
        return MatchResult::none();
    }

    let mut best = MatchResult::none();
    for paragraph in paragraphs {
        let confidence = score_paragraph(&spoken, &paragraph.text, params);
        if confidence > best.confidence {
            best = MatchResult {
                paragraph_index: paragraph.index,
                confidence,
            };
        }
    }
    best
}

fn score_paragraph(spoken: &[String], paragraph_text: &str, params: &ScoringParams) -> f32 {
    let paragraph_tokens = significant_tokens(paragraph_text, params.min_token_len);
    if paragraph_tokens.is_empty() {
        return 0.0;
    }

    let mut matching_words = 0.0f32;
    let mut sequential_matches = 0usize;
    let mut last_position: Option<usize> = None;

    for token in spoken {
        let Some((position, weight)) =
            match_token(token, &paragraph_tokens, last_position, params)
        else {
            continue;
        };
        matching_words += weight;
        if last_position.map_or(true, |last| position > last) {
            sequential_matches += 1;
        }
        last_position = Some(position);
    }

    let match_ratio = matching_words / spoken.len().max(1) as f32;
    let sequential_bonus = sequential_matches as f32 / matching_words.max(1.0);
    ((match_ratio + sequential_bonus) / 2.0).clamp(0.0, 1.0)
}

/// Exact containment first, preferring an occurrence past the previous match
/// so repeated words still read as in-order. Falls back to the best
/// edit-distance similarity against any paragraph token, weighted by that
/// similarity.
fn match_token(
    token: &str,
    paragraph_tokens: &[String],
    last_position: Option<usize>,
    params: &ScoringParams,
) -> Option<(usize, f32)> {
    let after = last_position.map_or(0, |p| p + 1);
    let exact = paragraph_tokens[after..]
        .iter()
        .position(|t| t == token)
        .map(|p| p + after)
        .or_else(|| paragraph_tokens.iter().position(|t| t == token));
    if let Some(position) = exact {
        return Some((position, 1.0));
    }

    let mut best: Option<(usize, f32)> = None;
    for (position, candidate) in paragraph_tokens.iter().enumerate() {
        let similarity = token_similarity(token, candidate);
        if best.map_or(true, |(_, s)| similarity > s) {
            best = Some((position, similarity));
        }
    }
    best.filter(|&(_, similarity)| similarity >= params.min_token_similarity)
}
