// Word tokenizer and n-gram expansion.
//
// Tokens are lowercased runs of two or more word characters; single-letter
// tokens and punctuation are dropped. N-grams are space-joined windows over
// the token stream, so the bigram of ["hello", "world"] is "hello world".
//
// regex-lite has no Unicode \w, so the word class lists ASCII plus the
// Latin-1 letter ranges explicitly (the À-Ö/Ø-ö/ø-ÿ split skips the × and ÷
// signs). Words in scripts beyond Latin-1 are not tokenized.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Compiled token pattern, created on first use and reused for the rest of
/// the process. Keeping this lazy means merely linking the crate (e.g. the
/// greet subcommand) never pays the compilation cost.
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9_À-ÖØ-öø-ÿ]{2,}").expect("token pattern is valid")
    })
}

/// Split text into lowercased word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    token_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Expand a token stream into all n-grams for n in `min_n..=max_n`.
///
/// Unigrams come out as the tokens themselves; longer grams are joined with
/// a single space. Order follows n ascending, then position.
pub fn ngrams(tokens: &[String], min_n: usize, max_n: usize) -> Vec<String> {
    let mut grams = Vec::new();
    for n in min_n..=max_n {
        if n == 0 || n > tokens.len() {
            continue;
        }
        for window in tokens.windows(n) {
            grams.push(window.join(" "));
        }
    }
    grams
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_drops_punctuation() {
        let tokens = tokenize("The Quick, Brown FOX!");
        assert_eq!(tokens, vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_tokenize_drops_single_characters() {
        let tokens = tokenize("a I x23 b");
        assert_eq!(tokens, vec!["x23"]);
    }

    #[test]
    fn test_tokenize_keeps_latin1_words_whole() {
        let tokens = tokenize("Café naïve Zürich");
        assert_eq!(tokens, vec!["café", "naïve", "zürich"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("...!?").is_empty());
    }

    #[test]
    fn test_unigrams_and_bigrams() {
        let tokens: Vec<String> = ["one", "two", "three"].iter().map(|s| s.to_string()).collect();
        let grams = ngrams(&tokens, 1, 2);
        assert_eq!(
            grams,
            vec!["one", "two", "three", "one two", "two three"]
        );
    }

    #[test]
    fn test_ngrams_longer_than_stream() {
        let tokens: Vec<String> = vec!["solo".to_string()];
        assert_eq!(ngrams(&tokens, 1, 2), vec!["solo"]);
    }
}
