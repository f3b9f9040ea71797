//! Reformatting of compact GraphQL text into an indented, human-readable form.
//!
//! The compact text produced by [`PrintNode::print`](super::PrintNode::print) contains no
//! whitespace, which is ideal for sending requests but hard to read. [`pretty_print`] scans the
//! text once from left to right and breaks lines after opening brackets and commas. It tracks
//! whether it's inside a string literal and copies literals through untouched, so argument values
//! like `"x,y{z}"` are never split up.

/// Number of spaces per indentation level used by
/// [`PrintNode::pretty_print`](super::PrintNode::pretty_print).
pub const DEFAULT_INDENT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Outside of any string literal, where brackets, commas and colons are reformatted.
    Structural,
    /// Inside a string literal.
    Literal,
    /// Inside a string literal right after a backslash.
    Escaped,
}

/// Reformat compact GraphQL text with `indent_width` spaces per nesting level.
///
/// Outside of string literals `{` and `(` open a new, deeper indented line and are preceded by
/// a space, `}` and `)` close it on a new line, commas end the current line, and colons are
/// followed by a space. All other characters are copied unchanged.
///
/// ```
/// use graphql_compose::builder::pretty_print;
///
/// assert_eq!(pretty_print("a(b:1){c,d}", 2), "a (\n  b: 1\n) {\n  c,\n  d\n}");
/// ```
pub fn pretty_print(compact: &str, indent_width: usize) -> String {
    let mut output = String::with_capacity(compact.len() * 2);
    let mut state = ScanState::Structural;
    let mut level: usize = 0;
    for c in compact.chars() {
        state = match state {
            ScanState::Structural => {
                match c {
                    '{' | '(' => {
                        level += 1;
                        output.push(' ');
                        output.push(c);
                        output.push('\n');
                        write_indent(&mut output, level * indent_width);
                    }
                    '}' | ')' => {
                        level = level.saturating_sub(1);
                        output.push('\n');
                        write_indent(&mut output, level * indent_width);
                        output.push(c);
                    }
                    ',' => {
                        output.push(',');
                        output.push('\n');
                        write_indent(&mut output, level * indent_width);
                    }
                    ':' => output.push_str(": "),
                    _ => output.push(c),
                };
                if c == '"' {
                    ScanState::Literal
                } else {
                    ScanState::Structural
                }
            }
            ScanState::Literal => {
                output.push(c);
                match c {
                    '"' => ScanState::Structural,
                    '\\' => ScanState::Escaped,
                    _ => ScanState::Literal,
                }
            }
            ScanState::Escaped => {
                output.push(c);
                ScanState::Literal
            }
        };
    }
    output
}

#[inline(always)]
fn write_indent(output: &mut String, width: usize) {
    for _ in 0..width {
        output.push(' ');
    }
}
