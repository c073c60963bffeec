//! Poem text layout for the 3D text mesh.
//!
//! The rendering layer draws one text geometry per line; this module
//! decides where the lines break. Greedy rule: a line ends at a word
//! carrying terminal punctuation, when it reaches the word cap, or at
//! the end of the text.

/// Word cap counted the legacy way: the count includes the pending
/// separator slot, so a line holds at most 9 words. Rendered layouts
/// depend on these exact break points.
const MAX_WORDS_PER_LINE: usize = 10;

fn has_break_punctuation(word: &str) -> bool {
    word.chars().any(|c| matches!(c, ',' | ':' | '.' | '!' | '?' | ';'))
}

/// Split poem text into display lines.
///
/// Whitespace-only input produces no lines.
pub fn wrap_poem(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        current.push(word);
        if has_break_punctuation(word) || current.len() + 1 >= MAX_WORDS_PER_LINE {
            lines.push(current.join(" "));
            current.clear();
        }
    }
    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breaks_after_punctuation() {
        let lines = wrap_poem("Hope is the thing with feathers, that perches in the soul");
        assert_eq!(
            lines,
            vec![
                "Hope is the thing with feathers,",
                "that perches in the soul"
            ]
        );
    }

    #[test]
    fn breaks_at_nine_words() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        let lines = wrap_poem(text);
        assert_eq!(
            lines,
            vec![
                "one two three four five six seven eight nine",
                "ten eleven twelve"
            ]
        );
    }

    #[test]
    fn nine_word_line_does_not_break_early() {
        let text = "one two three four five six seven eight nine";
        assert_eq!(wrap_poem(text), vec![text]);
    }

    #[test]
    fn punctuation_break_wins_over_word_cap() {
        let lines = wrap_poem("So. much depends upon a red wheel barrow glazed with rain");
        assert_eq!(lines[0], "So.");
    }

    #[test]
    fn last_word_always_terminates_a_line() {
        let lines = wrap_poem("only a few words");
        assert_eq!(lines, vec!["only a few words"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_poem("").is_empty());
        assert!(wrap_poem("   \n  ").is_empty());
    }

    #[test]
    fn multiple_punctuation_marks_each_break() {
        let lines = wrap_poem("I wake; I rise. I walk, alone");
        assert_eq!(lines, vec!["I wake;", "I rise.", "I walk,", "alone"]);
    }
}
