//! # Hierarchy Parser
//!
//! Reads the bracket-delimited host description into a [`Group`] tree.
//!
//! ```text
//! web:[
//! deploy@10.0.0.1
//! 10.0.0.2:2222
//! db:[
//! 10.0.1.1
//! ]
//! ]
//! 10.0.0.9
//! ```
//!
//! A line whose trimmed text ends with `:[` opens a group. Its body runs up to
//! the matching `]`, found by counting nested `:[` openers against `]`
//! closers, and may span any number of lines. Every other non-blank line is a
//! host in `[username@]host[:port]` form (see [`parse_host`]).
//!
//! Group bodies are parsed recursively, one stack frame per nesting level.
//! Nesting is capped at [`MAX_DEPTH`] groups so that the parser, the generator
//! and dropping the tree never run out of stack; deeper input fails with
//! [`ParseError::TooDeep`] before any of its body is scanned.

use crtgen_common::config::SessionDefaults;
use crtgen_common::session::{Branch, Group};

use crate::error::ParseError;

mod cursor;
mod host;

use cursor::Cursor;
pub use host::parse_host;

/// Opens a group when it ends a line.
pub const OPENER: &str = ":[";

/// Closes the innermost open group.
pub const CLOSER: u8 = b']';

/// Deepest group nesting accepted. A host inside the innermost group sits one
/// level below it.
pub const MAX_DEPTH: usize = 512;

/// Parses a whole hierarchy description into the synthetic `root` branch.
///
/// Fails on the first error found; no partial tree is returned.
pub fn parse(text: &str, defaults: &SessionDefaults) -> Result<Group, ParseError> {
    let mut root: Group = Branch::root().into();
    parse_into(&mut root, text, defaults, 0)?;
    Ok(root)
}

/// Appends a child to a branch.
///
/// Hosts cannot hold children, so attaching to a [`Group::Leaf`] fails with
/// [`ParseError::InvalidGroupTarget`].
pub fn attach(target: &mut Group, child: Group) -> Result<(), ParseError> {
    match target {
        Group::Branch(branch) => {
            branch.push(child);
            Ok(())
        }
        Group::Leaf(leaf) => Err(ParseError::InvalidGroupTarget {
            name: leaf.name().to_string(),
        }),
    }
}

fn parse_into(
    target: &mut Group,
    text: &str,
    defaults: &SessionDefaults,
    depth: usize,
) -> Result<(), ParseError> {
    let mut cursor = Cursor::new(text);

    loop {
        cursor.skip_whitespace();
        if cursor.is_at_end() {
            return Ok(());
        }

        let line: &str = cursor.current_line();
        let child: Group = match group_opener(line) {
            Some(open) => {
                let rest: &str = cursor.rest();
                let name: &str = rest[..open].trim();
                if name.is_empty() {
                    return Err(ParseError::EmptyGroupName);
                }

                if depth >= MAX_DEPTH {
                    return Err(ParseError::TooDeep { limit: MAX_DEPTH });
                }

                let body_start: usize = open + OPENER.len();
                let close: usize =
                    matching_close(rest, body_start).ok_or_else(ParseError::unclosed)?;

                let mut group: Group = Branch::new(name).into();
                parse_into(&mut group, &rest[body_start..close], defaults, depth + 1)?;

                cursor.advance(close + 1);
                group
            }
            None => {
                cursor.advance_line();
                let line: &str = line.trim();
                // A closer outside any group has nothing to close.
                if line.as_bytes().contains(&CLOSER) {
                    return Err(ParseError::stray_closer(line));
                }
                parse_host(line, defaults)?.into()
            }
        };

        attach(target, child)?;
    }
}

/// Offset of the first opener in `line` when the line is a group header.
fn group_opener(line: &str) -> Option<usize> {
    if line.trim_end().ends_with(OPENER) {
        line.find(OPENER)
    } else {
        None
    }
}

/// Finds the `]` that closes a group whose body starts at `body_start`.
fn matching_close(text: &str, body_start: usize) -> Option<usize> {
    let bytes: &[u8] = text.as_bytes();
    let opener: &[u8] = OPENER.as_bytes();
    let mut depth: usize = 1;
    let mut i: usize = body_start;

    while i < bytes.len() {
        if bytes[i..].starts_with(opener) {
            depth += 1;
            i += opener.len();
            continue;
        }
        if bytes[i] == CLOSER {
            depth -= 1;
            if depth == 0 {
                return Some(i);
            }
        }
        i += 1;
    }

    None
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
