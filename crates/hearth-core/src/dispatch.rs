//! The verb table and the dispatcher.
//!
//! Each verb maps to a [`Verb`] descriptor: the argument [`Shape`] the
//! parser uses to split the rest of the line, two gates saying whether
//! the verb is usable before and after authentication, and the handler.
//!
//! The pre-auth and post-auth namespaces are disjoint except for a few
//! housekeeping verbs (`help`, `who`, `quit`). An authenticated session
//! cannot `connect` again, and an unauthenticated one cannot `say`.

use std::collections::BTreeMap;
use std::sync::Arc;

use hearth_types::Command;
use hearth_world::{Session, World};
use tracing::debug;

use crate::error::CommandError;
use crate::handlers;
use crate::parser;

/// Reply for anything the table does not accept.
pub const UNRECOGNIZED: &str = "Huh?  (Type \"help\" for help.)";

/// Signature shared by every verb handler.
pub type Handler = fn(&World, &Arc<Session>, &Command) -> Result<(), CommandError>;

/// How the text after the verb is split into target and arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// No arguments; trailing text is ignored.
    Bare,
    /// The whole remainder is free text in `args`.
    Text,
    /// The whole remainder is the `target`.
    Target,
    /// `target` is the first word, `args` the rest.
    Pair,
    /// `target` is the text before the first `=`, `args` the text after.
    Assign,
}

/// Descriptor of one verb.
#[derive(Debug, Clone, Copy)]
pub struct Verb {
    /// Argument shape.
    pub shape: Shape,
    /// Usable by a session with no player attached.
    pub pre_auth: bool,
    /// Usable by a session with a player attached.
    pub post_auth: bool,
    /// The function that carries the verb out.
    pub handler: Handler,
}

impl Verb {
    /// A verb usable only before authentication.
    pub const fn pre_auth(shape: Shape, handler: Handler) -> Self {
        Self {
            shape,
            pre_auth: true,
            post_auth: false,
            handler,
        }
    }

    /// A verb usable only after authentication.
    pub const fn post_auth(shape: Shape, handler: Handler) -> Self {
        Self {
            shape,
            pre_auth: false,
            post_auth: true,
            handler,
        }
    }

    /// A verb usable in either state.
    pub const fn always(shape: Shape, handler: Handler) -> Self {
        Self {
            shape,
            pre_auth: true,
            post_auth: true,
            handler,
        }
    }

    /// Whether a session in the given state may use the verb.
    pub const fn permits(&self, authenticated: bool) -> bool {
        if authenticated { self.post_auth } else { self.pre_auth }
    }
}

/// Mapping from lowercase verb to descriptor.
#[derive(Debug, Clone, Default)]
pub struct DispatchTable {
    verbs: BTreeMap<&'static str, Verb>,
}

impl DispatchTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The full verb surface of the server.
    pub fn standard() -> Self {
        let mut table = Self::new();

        table.register(&["connect"], Verb::pre_auth(Shape::Pair, handlers::auth::connect));
        table.register(
            &["newplayer", "create"],
            Verb::pre_auth(Shape::Pair, handlers::auth::newplayer),
        );
        table.register(&["quit"], Verb::always(Shape::Bare, handlers::auth::quit));
        table.register(&["help"], Verb::always(Shape::Bare, handlers::info::help));
        table.register(&["who"], Verb::always(Shape::Bare, handlers::info::who));

        table.register(&["say"], Verb::post_auth(Shape::Text, handlers::social::say));
        table.register(
            &["emote", "pose"],
            Verb::post_auth(Shape::Text, handlers::social::emote),
        );
        table.register(&["look", "l"], Verb::post_auth(Shape::Target, handlers::look::look));
        table.register(
            &["examine", "ex"],
            Verb::post_auth(Shape::Target, handlers::look::examine),
        );
        table.register(
            &["go", "move", "walk"],
            Verb::post_auth(Shape::Target, handlers::movement::go),
        );

        table.register(
            &["@desc", "@describe"],
            Verb::post_auth(Shape::Assign, handlers::build::describe),
        );
        table.register(&["@name"], Verb::post_auth(Shape::Assign, handlers::build::rename));
        table.register(&["@dig"], Verb::post_auth(Shape::Pair, handlers::build::dig));
        table.register(&["@link"], Verb::post_auth(Shape::Pair, handlers::build::link));
        table.register(&["@set"], Verb::post_auth(Shape::Pair, handlers::admin::set));

        table
    }

    /// Register `verb` under every name in `names`.
    pub fn register(&mut self, names: &[&'static str], verb: Verb) {
        for name in names {
            self.verbs.insert(*name, verb);
        }
    }

    /// Look up a verb by its lowercase name.
    pub fn get(&self, verb: &str) -> Option<&Verb> {
        self.verbs.get(verb)
    }

    /// Route `command` to at most one handler.
    ///
    /// Unknown verbs and verbs gated off for the session's authentication
    /// state get [`UNRECOGNIZED`] and change nothing. A refused command's
    /// error is told to the session.
    pub fn dispatch(&self, world: &World, session: &Arc<Session>, command: &Command) {
        let Some(verb) = self.get(&command.verb) else {
            session.tell(UNRECOGNIZED);
            return;
        };
        if !verb.permits(session.is_authenticated()) {
            debug!(session = %session.id(), verb = command.verb, "verb gated by auth state");
            session.tell(UNRECOGNIZED);
            return;
        }

        debug!(session = %session.id(), verb = command.verb, target = command.target, "dispatch");
        if let Err(err) = (verb.handler)(world, session, command) {
            debug!(
                session = %session.id(),
                verb = command.verb,
                kind = %err.kind(),
                error = %err,
                "command refused"
            );
            session.tell(&err.to_string());
        }
    }

    /// Parse one raw input line and dispatch it.
    ///
    /// Lines the parser cannot make sense of get [`UNRECOGNIZED`] without
    /// consulting the table again.
    pub fn handle_line(&self, world: &World, session: &Arc<Session>, line: &str) {
        match parser::parse(self, session, line) {
            Some(command) => self.dispatch(world, session, &command),
            None => session.tell(UNRECOGNIZED),
        }
    }
}
