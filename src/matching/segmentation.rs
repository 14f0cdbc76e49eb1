use crate::types::Paragraph;

/// Length accounted for the blank-line separator between paragraphs when
/// accumulating character offsets.
const SEPARATOR_LEN: usize = 2;

/// Splits a script into ordered paragraphs on blank-line boundaries (one or
/// more blank lines). Candidates are trimmed and empty results discarded;
/// `char_offset` is the running sum of previous paragraphs' lengths plus
/// separator lengths.
///
/// Pure and idempotent: segmenting the rejoined output reproduces the same
/// paragraph count and relative offsets.
pub fn segment(script: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();
    let mut char_offset = 0usize;
    let mut block = String::new();

    let flush = |block: &mut String, paragraphs: &mut Vec<Paragraph>, offset: &mut usize| {
        let text = block.trim();
        if !text.is_empty() {
            let text = text.to_string();
            let len = text.len();
            paragraphs.push(Paragraph {
                index: paragraphs.len(),
                text,
                char_offset: *offset,
            });
            *offset += len + SEPARATOR_LEN;
        }
        block.clear();
    };

    for line in script.lines() {
        if line.trim().is_empty() {
            flush(&mut block, &mut paragraphs, &mut char_offset);
            continue;
        }
        if !block.is_empty() {
            block.push('\n');
        }
        block.push_str(line);
    }
    flush(&mut block, &mut paragraphs, &mut char_offset);

    paragraphs
}

/// Rejoins paragraphs with blank-line separators. Inverse of [`segment`] up
/// to whitespace normalization.
pub fn rejoin(paragraphs: &[Paragraph]) -> String {
    paragraphs
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_script_yields_no_paragraphs() {
        assert!(segment("").is_empty());
        assert!(segment("   \n\n  \n").is_empty());
    }

    #[test]
    fn splits_on_blank_lines() {
        let script = "First paragraph.\n\nSecond paragraph.\n\n\nThird.";
        let paragraphs = segment(script);
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0].text, "First paragraph.");
        assert_eq!(paragraphs[1].text, "Second paragraph.");
        assert_eq!(paragraphs[2].text, "Third.");
    }

    #[test]
    fn consecutive_lines_stay_in_one_paragraph() {
        let paragraphs = segment("line one\nline two\n\nnext");
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].text, "line one\nline two");
    }

    #[test]
    fn indices_follow_document_order() {
        let paragraphs = segment("a\n\nb\n\nc");
        let indices: Vec<usize> = paragraphs.iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn char_offsets_accumulate_with_separator() {
        let paragraphs = segment("alpha\n\nbeta gamma\n\ndelta");
        assert_eq!(paragraphs[0].char_offset, 0);
        assert_eq!(paragraphs[1].char_offset, "alpha".len() + 2);
        assert_eq!(
            paragraphs[2].char_offset,
            "alpha".len() + 2 + "beta gamma".len() + 2
        );
    }

    #[test]
    fn candidates_are_trimmed() {
        let paragraphs = segment("  padded text  \n\nnext");
        assert_eq!(paragraphs[0].text, "padded text");
    }

    #[test]
    fn round_trip_is_idempotent() {
        let script = "One.\n\n  Two with spaces.  \n\n\n\nThree\nspans lines.";
        let first = segment(script);
        let second = segment(&rejoin(&first));
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.text, b.text);
            assert_eq!(a.char_offset, b.char_offset);
        }
    }
}
