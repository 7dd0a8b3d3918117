//! Turning a raw input line into a [`Command`].
//!
//! The parser only decides *what* was asked for; whether it is allowed is
//! the dispatcher's business. It consults the dispatch table for the
//! verb's argument [`Shape`] and, for authenticated sessions, the exits of
//! the player's room so a bare direction word works as a move.

use hearth_types::Command;
use hearth_world::Session;

use crate::dispatch::{DispatchTable, Shape};

/// Verb synthesized for bare exit names.
const MOVE_VERB: &str = "move";

/// Parse `line` for `session`.
///
/// Returns `None` when the line names no known verb and no exit, in which
/// case the caller replies generically without dispatching.
///
/// 1. Leading `"` becomes `say`, leading `:` becomes `emote`.
/// 2. The first word is the verb, matched case-insensitively.
/// 3. An unknown verb that exactly matches an exit of the player's room
///    becomes `move <exit>`.
/// 4. The rest of the line is split according to the verb's shape.
pub fn parse(table: &DispatchTable, session: &Session, line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let rewritten;
    let line = if let Some(rest) = line.strip_prefix('"') {
        rewritten = format!("say {rest}");
        rewritten.as_str()
    } else if let Some(rest) = line.strip_prefix(':') {
        rewritten = format!("emote {rest}");
        rewritten.as_str()
    } else {
        line
    };

    let (word, rest) = split_first_word(line);
    let verb = word.to_lowercase();

    let Some(descriptor) = table.get(&verb) else {
        let player = session.player()?;
        player.location().exit_named_exactly(word)?;
        return Some(Command::new(MOVE_VERB, word, ""));
    };

    Some(split_by_shape(verb, descriptor.shape, rest))
}

/// Split `rest` into target and arguments according to `shape`.
pub fn split_by_shape(verb: String, shape: Shape, rest: &str) -> Command {
    let rest = rest.trim();
    match shape {
        Shape::Bare => Command::new(verb, "", ""),
        Shape::Text => Command::new(verb, "", rest),
        Shape::Target => Command::new(verb, rest, ""),
        Shape::Pair => {
            let (target, args) = split_first_word(rest);
            Command::new(verb, target, args)
        }
        Shape::Assign => match rest.split_once('=') {
            Some((target, args)) => Command::new(verb, target.trim(), args.trim()),
            None => Command::new(verb, rest, ""),
        },
    }
}

/// First whitespace-delimited word and the trimmed remainder.
fn split_first_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    }
}
