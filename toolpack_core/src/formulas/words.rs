//! # Word Counter
//!
//! Text statistics: words, characters, sentences, paragraphs, and estimated
//! reading/speaking times. All counts are defined over the raw input text;
//! nothing is normalized beyond the splitting rules below.
//!
//! - Words: whitespace-delimited non-empty tokens
//! - Sentences: non-blank segments after splitting on `.` `!` `?`
//! - Paragraphs: non-blank segments after splitting on blank lines
//! - Reading time: ceil(words / 200) minutes; speaking: ceil(words / 150)
//!
//! ## Example
//!
//! ```rust
//! use toolpack_core::formulas::words::{calculate, WordsInput};
//!
//! let result = calculate(&WordsInput { text: "Hello world.".to_string() });
//! assert_eq!(result.words, 2);
//! assert_eq!(result.sentences, 1);
//! assert_eq!(result.characters, 12);
//! ```

use serde::{Deserialize, Serialize};

/// Words-per-minute rate for silent reading
const READING_WPM: u64 = 200;

/// Words-per-minute rate for speaking aloud
const SPEAKING_WPM: u64 = 150;

/// Input text for the word counter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsInput {
    /// The text to analyze
    pub text: String,
}

/// Results from text analysis.
///
/// ## JSON Example
///
/// ```json
/// {
///   "words": 2,
///   "characters": 12,
///   "characters_no_spaces": 11,
///   "sentences": 1,
///   "paragraphs": 1,
///   "reading_minutes": 1,
///   "speaking_minutes": 1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordsResult {
    /// Whitespace-delimited non-empty tokens
    pub words: u64,

    /// Total characters, whitespace included
    pub characters: u64,

    /// Characters excluding all whitespace
    pub characters_no_spaces: u64,

    /// Non-blank segments split on `.`, `!`, `?`
    pub sentences: u64,

    /// Non-blank segments split on blank lines
    pub paragraphs: u64,

    /// Estimated silent reading time, whole minutes (ceiling)
    pub reading_minutes: u64,

    /// Estimated speaking time, whole minutes (ceiling)
    pub speaking_minutes: u64,
}

/// Compute all text statistics. Total over any input; `""` yields all zeros.
pub fn calculate(input: &WordsInput) -> WordsResult {
    let text = input.text.as_str();

    let words = text.split_whitespace().count() as u64;

    let characters = text.chars().count() as u64;
    let characters_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count() as u64;

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count() as u64;

    let paragraphs = count_paragraphs(text);

    WordsResult {
        words,
        characters,
        characters_no_spaces,
        sentences,
        paragraphs,
        reading_minutes: words.div_ceil(READING_WPM),
        speaking_minutes: words.div_ceil(SPEAKING_WPM),
    }
}

/// Count runs of non-blank lines. A line containing only whitespace is blank.
fn count_paragraphs(text: &str) -> u64 {
    let mut paragraphs = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            paragraphs += 1;
            in_paragraph = true;
        }
    }
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(text: &str) -> WordsResult {
        calculate(&WordsInput {
            text: text.to_string(),
        })
    }

    #[test]
    fn test_empty_text_all_zero() {
        let result = stats("");
        assert_eq!(
            result,
            WordsResult {
                words: 0,
                characters: 0,
                characters_no_spaces: 0,
                sentences: 0,
                paragraphs: 0,
                reading_minutes: 0,
                speaking_minutes: 0,
            }
        );
    }

    #[test]
    fn test_hello_world() {
        let result = stats("Hello world.");
        assert_eq!(result.words, 2);
        assert_eq!(result.sentences, 1);
        assert_eq!(result.characters, 12);
        assert_eq!(result.characters_no_spaces, 11);
        assert_eq!(result.paragraphs, 1);
    }

    #[test]
    fn test_sentences_split_on_terminators() {
        let result = stats("One. Two! Three? Four");
        assert_eq!(result.sentences, 4);
        assert_eq!(result.words, 4);
    }

    #[test]
    fn test_trailing_terminator_not_extra_sentence() {
        assert_eq!(stats("Done.").sentences, 1);
        assert_eq!(stats("Done...").sentences, 1);
    }

    #[test]
    fn test_paragraph_blank_line_split() {
        let result = stats("First paragraph.\n\nSecond paragraph.\n   \nThird.");
        assert_eq!(result.paragraphs, 3);
    }

    #[test]
    fn test_multiline_single_paragraph() {
        let result = stats("line one\nline two\nline three");
        assert_eq!(result.paragraphs, 1);
        assert_eq!(result.words, 6);
    }

    #[test]
    fn test_reading_and_speaking_ceilings() {
        let text = std::iter::repeat("word")
            .take(201)
            .collect::<Vec<_>>()
            .join(" ");
        let result = stats(&text);
        assert_eq!(result.words, 201);
        assert_eq!(result.reading_minutes, 2); // ceil(201 / 200)
        assert_eq!(result.speaking_minutes, 2); // ceil(201 / 150)
    }

    #[test]
    fn test_whitespace_only_text() {
        let result = stats("   \n\t  \n");
        assert_eq!(result.words, 0);
        assert_eq!(result.sentences, 0);
        assert_eq!(result.paragraphs, 0);
        assert!(result.characters > 0);
    }
}
