//! Comment stripping for `npm-scripts.json`.
//!
//! The config file accepts C-style comments so users can annotate their
//! publish scripts. JSON itself has no comment syntax, so comments are
//! blanked to whitespace before parsing:
//!
//! - `// line comments` run to the end of the line
//! - `/* block comments */` may span lines
//! - comment markers inside JSON strings are literal text and are kept
//!
//! Blanking instead of deleting preserves every newline and the column of
//! every surviving character, so parse errors reported against the
//! stripped text still point at the right spot in the author's file.

/// Lexer state while scanning the document.
enum State {
    /// Outside any string or comment.
    Code,
    /// Inside a double-quoted JSON string.
    Str,
    /// Inside a string, immediately after a backslash.
    StrEscape,
    /// Inside a `//` comment, until end of line.
    LineComment,
    /// Inside a `/* ... */` comment.
    BlockComment,
}

/// Replace C-style comments with whitespace, leaving strings intact.
///
/// An unterminated block comment blanks through to the end of the input.
/// The parser rejects the truncated document afterwards, which is a better
/// error than this layer could produce.
pub fn strip_json_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut state = State::Code;

    while let Some(ch) = chars.next() {
        match state {
            State::Code => match ch {
                '"' => {
                    state = State::Str;
                    out.push(ch);
                }
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    out.push_str("  ");
                    state = State::LineComment;
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push_str("  ");
                    state = State::BlockComment;
                }
                _ => out.push(ch),
            },
            State::Str => match ch {
                '\\' => {
                    state = State::StrEscape;
                    out.push(ch);
                }
                '"' => {
                    state = State::Code;
                    out.push(ch);
                }
                _ => out.push(ch),
            },
            State::StrEscape => {
                state = State::Str;
                out.push(ch);
            }
            State::LineComment => {
                if ch == '\n' {
                    state = State::Code;
                    out.push(ch);
                } else if ch == '\r' {
                    out.push(ch);
                } else {
                    out.push(' ');
                }
            }
            State::BlockComment => {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    state = State::Code;
                } else if ch == '\n' || ch == '\r' {
                    out.push(ch);
                } else {
                    out.push(' ');
                }
            }
        }
    }

    out
}
