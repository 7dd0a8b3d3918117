//! The parsed form of one line of player input.
//!
//! A [`Command`] is produced by the parser and consumed by exactly one
//! handler within the same request. Empty strings mean "not given".

/// A structured command: verb, optional target, optional free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    /// Lowercased verb that selects the handler.
    pub verb: String,
    /// Secondary token, usually the name of the thing acted upon.
    pub target: String,
    /// Free-text remainder.
    pub args: String,
}

impl Command {
    /// Build a command from its three parts.
    pub fn new(verb: impl Into<String>, target: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            target: target.into(),
            args: args.into(),
        }
    }

    /// Check whether a target token was supplied.
    pub fn has_target(&self) -> bool {
        !self.target.is_empty()
    }

    /// Check whether argument text was supplied.
    pub fn has_args(&self) -> bool {
        !self.args.is_empty()
    }
}
