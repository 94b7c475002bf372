//! Line classification.
//!
//! A line is blank, comment, or code. Comment detection is a prefix
//! heuristic: the trimmed line starts with one of the configured tokens.
//! A code line that happens to start with a token (say, inside a string
//! literal) is reported as a comment; that is an accepted limitation of
//! the heuristic, not something the classifier tries to repair.

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only; excluded from code and comment counts
    Blank,
    /// Trimmed line starts with a configured comment token
    Comment,
    /// Everything else
    Code,
}

/// Classify one line against an ordered set of comment-prefix tokens.
///
/// Tokens are checked in source order and the first match wins.
pub fn classify(line: &str, tokens: &[String]) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if tokens.iter().any(|t| trimmed.starts_with(t.as_str())) {
        return LineKind::Comment;
    }
    LineKind::Code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_blank_lines() {
        let toks = tokens(&["//"]);
        assert_eq!(classify("", &toks), LineKind::Blank);
        assert_eq!(classify("   ", &toks), LineKind::Blank);
        assert_eq!(classify("\t \t", &toks), LineKind::Blank);
    }

    #[test]
    fn test_comment_lines() {
        let toks = tokens(&["//"]);
        assert_eq!(classify("// hello", &toks), LineKind::Comment);
        assert_eq!(classify("   // indented", &toks), LineKind::Comment);
        assert_eq!(classify("\t//tab", &toks), LineKind::Comment);
    }

    #[test]
    fn test_code_lines() {
        let toks = tokens(&["//"]);
        assert_eq!(classify("x := 1", &toks), LineKind::Code);
        assert_eq!(classify("package main", &toks), LineKind::Code);
        // token not at the start is still code
        assert_eq!(classify("x := 1 // trailing", &toks), LineKind::Code);
    }

    #[test]
    fn test_multiple_tokens() {
        let toks = tokens(&["//", "#", "--"]);
        assert_eq!(classify("# python style", &toks), LineKind::Comment);
        assert_eq!(classify("-- sql style", &toks), LineKind::Comment);
        assert_eq!(classify("print('hi')", &toks), LineKind::Code);
    }

    #[test]
    fn test_first_match_wins_in_source_order() {
        // overlapping tokens; first match decides, result is the same kind
        let toks = tokens(&["/", "//"]);
        assert_eq!(classify("// both match", &toks), LineKind::Comment);
    }

    #[test]
    fn test_string_literal_misclassification_is_accepted() {
        let toks = tokens(&["//"]);
        // syntactic heuristic only: this is code, but counts as comment
        assert_eq!(classify("\"// not a comment\"", &toks), LineKind::Code);
        assert_eq!(classify("// inside := \"code\"", &toks), LineKind::Comment);
    }
}
