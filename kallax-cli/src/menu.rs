//! The interactive two-menu shell.
//!
//! Menus form a small state machine: every command line answers with a
//! [`Reply`] telling the driver loop what to print and where to go next.
//! Nothing in here touches stdin or stdout directly, so the whole shell
//! is testable as plain function calls.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use kallax_core::{Manager, ModelError, Rendered};

/// Which menu is reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    Collections,
}

/// What a dispatched command wants the driver loop to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and prompt again.
    Text(String),
    /// Switch menus (the driver shows the new menu's help).
    Goto(MenuState),
    /// Save and leave.
    Exit,
}

pub const INTRO: &str = "
    Kallax Board Game Shelf
    (board games sold separately)

    Separate command arguments with spaces. For multi-word
    names use dashes instead, eg: ticket-to-ride
";

const MAIN_HELP: &str = "
  1 add game                  ::= 1 [title] [players] [duration] [recommended_age]
  2 remove game               ::= 2 [title|index]
  3 edit game                 ::= 3 [title|index] [field] [value]
  4 list games                ::= 4 ([field] [value])...
  5 rate game                 ::= 5 [title|index] [rating]
  6 play game                 ::= 6 [title|index]
  - - - - - - - - - - - - - - - - -
  8 manage collections        ::= 8
  ? show help                 ::= ?
  0 save and exit             ::= 0
";

const COLLECTIONS_HELP: &str = "
  1 create new collection     ::= 1 [name]
  2 remove collection         ::= 2 [name|index]
  3 rename collection         ::= 3 [name|index] [new name]
  4 list all collections      ::= 4
  5 select active collection  ::= 5 [name|index]
  - - - - - - - - - - - - - - - - -
  8 back to the games         ::= 8
  ? show help                 ::= ?
  0 save and exit             ::= 0
";

/// Help text for a menu.
pub fn help(state: MenuState) -> &'static str {
    match state {
        MenuState::Main => MAIN_HELP,
        MenuState::Collections => COLLECTIONS_HELP,
    }
}

/// Lowercase an input line and split it into command tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Execute one command line against `manager`.
pub fn dispatch(state: MenuState, manager: &mut Manager, tokens: &[String]) -> Reply {
    let Some((action, args)) = tokens.split_first() else {
        return Reply::Text("type ? for help, 0 to exit".to_string());
    };
    match state {
        MenuState::Main => dispatch_main(manager, action, args),
        MenuState::Collections => dispatch_collections(manager, action, args),
    }
}

fn dispatch_main(manager: &mut Manager, action: &str, args: &[String]) -> Reply {
    match (action, args) {
        ("1", [title, players, duration, age, rest @ ..]) if rest.len() <= 2 => {
            let times_played = rest.first().map(String::as_str);
            let rating = rest.get(1).map(String::as_str);
            report(
                manager
                    .active_mut()
                    .add_game(title, players, duration, age, times_played, rating)
                    .map(|()| "added the game".to_string()),
            )
        }
        ("2", [key]) => report(
            manager
                .active_mut()
                .remove(key)
                .map(|game| format!("removed '{}'", game.title())),
        ),
        ("3", [key, field, value]) => report(
            manager
                .active_mut()
                .edit(key, field, value)
                .map(|()| format!("set {field} to {value}")),
        ),
        ("4", tokens) => {
            let rendered = manager.active().render(tokens);
            listing_reply(rendered, tokens.is_empty())
        }
        ("5", [key, rating]) => report(
            manager
                .active_mut()
                .rate(key, rating)
                .map(|()| format!("set rating to {rating}")),
        ),
        ("6", [key]) => report(
            manager
                .active_mut()
                .log_play(key)
                .map(|total| format!("you played the game, total times played: {total}")),
        ),
        ("8", []) => Reply::Goto(MenuState::Collections),
        ("?", []) => Reply::Text(MAIN_HELP.to_string()),
        ("0", []) => Reply::Exit,
        _ => invalid(),
    }
}

fn dispatch_collections(manager: &mut Manager, action: &str, args: &[String]) -> Reply {
    match (action, args) {
        ("1", [name]) => report(
            manager
                .add_collection(name)
                .map(|()| format!("created collection '{name}'")),
        ),
        ("2", [key]) => report(
            manager
                .remove_collection(key)
                .map(|collection| format!("removed collection '{}'", collection.name())),
        ),
        ("3", [key, name]) => report(
            manager
                .rename_collection(key, name)
                .map(|()| format!("renamed collection to '{name}'")),
        ),
        ("4", []) => Reply::Text(manager.render_all()),
        ("5", [key]) => match manager.select_active(key) {
            Ok(()) => info(format!("selected collection '{}'", manager.active().name())),
            Err(err) => error(err),
        },
        ("8", []) => Reply::Goto(MenuState::Main),
        ("?", []) => Reply::Text(COLLECTIONS_HELP.to_string()),
        ("0", []) => Reply::Exit,
        _ => invalid(),
    }
}

/// Listing output: filter diagnostics first, then the rendered block.
/// A bare listing gets a screenful of padding so stale output scrolls
/// away; a filtered one keeps the diagnostics in view.
fn listing_reply(rendered: Rendered, bare: bool) -> Reply {
    let mut text = String::new();
    for issue in &rendered.issues {
        text.push_str(&format!(
            "{} {issue}\n",
            "Warning:".if_supports_color(Stdout, |t| t.yellow())
        ));
    }
    if bare {
        text.push_str(&"\n".repeat(50));
    }
    text.push_str(&rendered.text);
    Reply::Text(text)
}

fn report(result: Result<String, ModelError>) -> Reply {
    match result {
        Ok(message) => info(message),
        Err(err) => error(err),
    }
}

fn info(message: String) -> Reply {
    Reply::Text(format!(
        "{} {message}",
        "Info:".if_supports_color(Stdout, |t| t.green())
    ))
}

fn error(err: ModelError) -> Reply {
    Reply::Text(format!(
        "{} {err}",
        "Error:".if_supports_color(Stdout, |t| t.red())
    ))
}

fn invalid() -> Reply {
    Reply::Text("Invalid action or argument count.".to_string())
}
