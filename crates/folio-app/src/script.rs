//! Gesture script parsing.
//!
//! One command per line:
//!
//! ```text
//! # comment
//! click icon:0
//! hover trash
//! wait 100
//! chunk 512
//! volume 40
//! ```

use folio_core::error::{FolioError, Result};
use folio_core::input::{Element, EventKind, InputEvent};

/// A single script step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Dispatch an input event.
    Event(InputEvent),
    /// Advance the scheduler by this many milliseconds.
    Wait(u32),
    /// Deliver a silent capture chunk of this many bytes.
    Chunk(usize),
    /// Move the master volume slider.
    Volume(i32),
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut parts = line.split_whitespace();
    let (Some(verb), Some(arg), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(FolioError::Script(format!(
            "expected '<command> <argument>', got '{line}'"
        )));
    };

    let command = match verb {
        "wait" => Command::Wait(number(verb, arg)?),
        "chunk" => Command::Chunk(number(verb, arg)?),
        "volume" => Command::Volume(number(verb, arg)?),
        _ => {
            let kind: EventKind = verb.parse()?;
            let target: Element = arg.parse()?;
            Command::Event(InputEvent::Pointer { target, kind })
        },
    };
    Ok(Some(command))
}

/// Parse a whole script, reporting the first bad line by number.
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (n, line) in text.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(cmd)) => commands.push(cmd),
            Ok(None) => {},
            Err(e) => return Err(FolioError::Script(format!("line {}: {e}", n + 1))),
        }
    }
    Ok(commands)
}

fn number<T: std::str::FromStr>(verb: &str, arg: &str) -> Result<T> {
    arg.parse()
        .map_err(|_| FolioError::Script(format!("'{verb}' needs a number, got '{arg}'")))
}
