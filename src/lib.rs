#![allow(clippy::module_inception)]

use std::{path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A byte offset into a source, tagged with the source's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

/// Half-open `[start, end)` range of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line holding byte `position` of `content`.
///
/// Returns the 1-based line number, the line's text (with its newline) and
/// the byte column of `position` within it. A position at the end of the
/// content lands just past the last character.
pub fn get_line_at_position(content: &str, position: u32) -> (usize, String, usize) {
    let pos = (position as usize).min(content.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = pos - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    match content.rsplit_once('\n') {
        // trailing newline (or empty input): the position opens a new line
        _ if content.is_empty() || content.ends_with('\n') => (line_number, String::new(), 0),
        Some((_, last)) => (line_number - 1, last.to_string(), last.len()),
        None => (1, content.to_string(), content.len()),
    }
}

/// Renders a lexer error against the source it came from.
///
/// ```text
/// Error: UnexpectedCharacter (Unexpected character: '@')
/// -> main.lk
///    |
/// 20 | a = @
///    | ----^
/// ```
pub fn format_error(error: &Error, file: &Path, source: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", file.as_os_str().to_string_lossy()));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let column = line_text[..line_pos].chars().count();
    let arrows = column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    let removed = string.len() - trimmed.len();

    (String::from(trimmed), removed)
}

#[cfg(test)]
mod tests {
    use std::{path::Path, rc::Rc};

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position,
    };

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 27);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_content() {
        assert_eq!(
            super::get_line_at_position("ab\ncd", 5),
            (2, String::from("cd"), 2)
        );
        assert_eq!(
            super::get_line_at_position("ab\n", 3),
            (2, String::new(), 0)
        );
        assert_eq!(super::get_line_at_position("abc", 3), (1, String::from("abc"), 3));
        assert_eq!(super::get_line_at_position("", 0), (1, String::new(), 0));
    }

    #[test]
    fn test_format_error_points_at_offset() {
        let source = "a = b\n  c @ d\n";
        let error = Error::new(
            ErrorImpl::UnexpectedCharacter { character: '@' },
            Position(10, Rc::new("main.lk".to_string())),
        );

        let rendered = super::format_error(&error, Path::new("main.lk"), source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: UnexpectedCharacter (Unexpected character: '@')");
        assert_eq!(lines[1], "-> main.lk");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | c @ d");
        assert_eq!(lines[4], "  | --^");
    }

    #[test]
    fn test_remove_starting_whitespace() {
        assert_eq!(
            super::remove_starting_whitespace("\t  x y"),
            (String::from("x y"), 3)
        );
        assert_eq!(super::remove_starting_whitespace("x"), (String::from("x"), 0));
    }
}
