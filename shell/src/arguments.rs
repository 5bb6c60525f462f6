//! Verbatim argument recovery.
//!
//! Re-joining tokens loses the spacing the user typed, so free-text payloads
//! (file contents for `fs wr`) are cut straight out of the original line.

/// Return the part of `line` that follows the first `skip` tokens.
///
/// Each token is located with a forward search starting where the previous
/// one ended, and any run of spaces right after it is consumed. Spacing
/// inside the remainder is left untouched. An empty string is returned when a
/// token cannot be found or nothing is left after the skipped tokens.
pub fn command_arguments<'a>(line: &'a str, tokens: &[&str], skip: usize) -> &'a str {
    let mut index = 0;

    for token in tokens.iter().take(skip) {
        let found_at = match line[index..].find(token) {
            Some(offset) => index + offset,
            None => return "",
        };

        index = found_at + token.len();

        while line.as_bytes().get(index) == Some(&b' ') {
            index += 1;
        }
    }

    if index >= line.len() {
        return "";
    }

    &line[index..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_payload_spacing_preserved() {
        let line = "fs wr a.txt   hello world";
        let tokens = tokenize(line).unwrap();
        assert_eq!(command_arguments(line, &tokens, 3), "hello world");

        let line = "fs wr a.txt hello    spaced   out  ";
        let tokens = tokenize(line).unwrap();
        assert_eq!(command_arguments(line, &tokens, 3), "hello    spaced   out  ");
    }

    #[test]
    fn test_leading_spaces_before_first_token() {
        let line = "   fs  wr   b.txt x";
        let tokens = tokenize(line).unwrap();
        assert_eq!(command_arguments(line, &tokens, 3), "x");
    }

    #[test]
    fn test_nothing_left() {
        let line = "fs wr a.txt   ";
        let tokens = tokenize(line).unwrap();
        assert_eq!(command_arguments(line, &tokens, 3), "");
    }

    #[test]
    fn test_missing_token_yields_empty() {
        assert_eq!(command_arguments("fs wr a.txt x", &["fs", "rd"], 2), "");
    }

    #[test]
    fn test_skip_zero_returns_whole_line() {
        let line = "p  hi";
        let tokens = tokenize(line).unwrap();
        assert_eq!(command_arguments(line, &tokens, 0), "p  hi");
    }

    #[test]
    fn test_repeated_token_text_found_in_order() {
        // The content repeats the file name; the search resumes after each match.
        let line = "fs wr a a a";
        let tokens = tokenize(line).unwrap();
        assert_eq!(command_arguments(line, &tokens, 3), "a a");
    }
}
