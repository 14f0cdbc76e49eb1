/// Articles, common pronouns and conjunctions carry no alignment signal and
/// are dropped before scoring.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "but", "or", "this", "that", "then", "than", "they", "there", "was",
    "were", "with",
];

/// Lowercases and splits `text` on whitespace, dropping stop words and
/// tokens shorter than `min_token_len`.
pub fn significant_tokens(text: &str, min_token_len: usize) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.to_lowercase())
        .filter(|w| w.chars().count() >= min_token_len)
        .filter(|w| !STOP_WORDS.contains(&w.as_str()))
        .collect()
}

/// Levenshtein distance over scalar characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Edit distance normalized to a 0-1 similarity: `1 - dist / max_len`.
pub fn token_similarity(a: &str, b: &str) -> f32 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - edit_distance(a, b) as f32 / max_len as f32
}
