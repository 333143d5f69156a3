//! Permissive literal syntax for single objects.
//!
//! Models regularly answer with literal-style objects that are not strict
//! JSON: `{'day': 1, 'done': True, 'notes': None,}`. This module rewrites
//! that dialect into JSON before handing it to serde:
//!
//! - single-quoted strings become double-quoted strings
//! - `True`, `False` and `None` become `true`, `false` and `null`
//! - a trailing comma before a closing brace or bracket is dropped
//!
//! Anything else (unquoted keys, comments, tuples) is left alone and will
//! fail to parse.

use crate::models::RawObject;

/// Parse one object written in the permissive literal dialect.
pub fn parse_object(text: &str) -> Result<RawObject, serde_json::Error> {
    serde_json::from_str(&to_json(text))
}

fn to_json(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' => {
                out.push('"');
                copy_string(c, &mut chars, &mut out);
                out.push('"');
            }
            '}' | ']' => {
                strip_trailing_comma(&mut out);
                out.push(c);
            }
            c if c.is_ascii_alphabetic() || c == '_' => {
                let mut word = String::from(c);
                while let Some(&next) = chars.peek() {
                    if next.is_ascii_alphanumeric() || next == '_' {
                        word.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                out.push_str(match word.as_str() {
                    "True" => "true",
                    "False" => "false",
                    "None" => "null",
                    _ => word.as_str(),
                });
            }
            _ => out.push(c),
        }
    }

    out
}

/// Copy the body of a string opened by `quote`, re-escaping it for a
/// double-quoted JSON string. Consumes the closing quote.
fn copy_string<I>(quote: char, chars: &mut std::iter::Peekable<I>, out: &mut String)
where
    I: Iterator<Item = char>,
{
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\'') => out.push('\''),
                Some(escaped) => {
                    out.push('\\');
                    out.push(escaped);
                }
                None => out.push('\\'),
            },
            c if c == quote => return,
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
}

fn strip_trailing_comma(out: &mut String) {
    let trimmed_len = out.trim_end().len();
    if out[..trimmed_len].ends_with(',') {
        out.truncate(trimmed_len - 1);
    }
}
