//! End-to-end dispatch through the public API.

use std::cell::RefCell;
use std::rc::Rc;

use insta::assert_snapshot;
use subcli_dispatch::{
    AppInfo, Args, Command, Dispatcher, Example, Flag, ParseError, PlainHelp, Registry,
    SharedBuffer, Streams, Termination, TerminationReason, Topic,
};

// ============================================================================
// Test helpers
// ============================================================================

struct Run {
    result: Result<i32, Termination>,
    out: String,
    err: String,
}

fn dispatch(registry: &Registry, tokens: &[&str]) -> Run {
    let (out, err) = (SharedBuffer::new(), SharedBuffer::new());
    let (mut out_w, mut err_w) = (out.clone(), err.clone());
    let mut streams = Streams::new(&mut out_w, &mut err_w);
    let result = Dispatcher::new(registry, &PlainHelp).run(tokens, &mut streams);
    Run {
        result,
        out: out.contents(),
        err: err.contents(),
    }
}

/// A registry shaped like the demo app, recording what `join` receives.
fn demo_registry(strict: bool) -> (Registry, Rc<RefCell<Vec<Args>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let seen = calls.clone();

    let mut registry = Registry::new(AppInfo {
        name: "demo".into(),
        brief: "Demo is a funky demonstration.".into(),
        version: "stable".into(),
        strict,
    });
    registry.commands.push(
        Command::new("join", move |args| {
            seen.borrow_mut().push(args.clone());
            0
        })
        .brief("merges the strings given")
        .usage("[-s=] \"a few\" distinct strings")
        .help("Joins the strings given.")
        .flag(Flag::new("separator").short("s").default_value(" "))
        .example(Example::new("-s . google com", "Results in \"google.com\"")),
    );
    registry
        .commands
        .push(Command::new("install", |_| 0).brief("installs things"));
    registry
        .commands
        .push(Command::new("list", |_| 0).brief("lists things"));
    registry
        .topics
        .push(Topic::new("writing", "markdown cheatsheet", "Use *stars*."));

    (registry, calls)
}

// ============================================================================
// Routing
// ============================================================================

#[test]
fn join_receives_folded_separator() {
    let (registry, calls) = demo_registry(true);

    let run = dispatch(&registry, &["join", "-s", ".", "google", "com"]);

    assert_eq!(run.result, Ok(0));
    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].get("separator"), Some(". google com"));
}

#[test]
fn lenient_join_skips_positionals() {
    let (registry, calls) = demo_registry(false);

    let run = dispatch(&registry, &["join", "google", "--color=auto"]);

    assert_eq!(run.result, Ok(0));
    let calls = calls.borrow();
    assert!(!calls[0].has("separator"));
    assert_eq!(calls[0].string("color"), "auto");
}

#[test]
fn flag_first_without_root_shows_global_help() {
    let (registry, calls) = demo_registry(true);

    let run = dispatch(&registry, &["--verbose"]);

    assert_eq!(run.result, Ok(0));
    assert!(run.out.contains("The commands are:"));
    assert!(calls.borrow().is_empty());
}

#[test]
fn first_match_wins_for_duplicate_names() {
    let mut registry = Registry::new(AppInfo {
        name: "demo".into(),
        ..AppInfo::default()
    });
    registry.commands.push(Command::new("twin", |_| 1));
    registry.commands.push(Command::new("twin", |_| 2));

    assert_eq!(dispatch(&registry, &["twin"]).result, Ok(1));
}

// ============================================================================
// Built-ins
// ============================================================================

#[test]
fn version_line() {
    let (registry, _) = demo_registry(true);
    let run = dispatch(&registry, &["version"]);
    assert_eq!(run.result, Ok(0));
    assert_snapshot!(run.out.trim_end(), @"demo version stable");
}

#[test]
fn help_alone_prints_global_help() {
    let (registry, _) = demo_registry(true);
    let run = dispatch(&registry, &["help"]);
    assert_eq!(run.result, Ok(0));
    assert!(run.out.starts_with("Demo is a funky demonstration.\n"));
    assert!(run.out.contains("\tjoin        merges the strings given\n"));
    assert!(run.out.contains("Additional help topics:"));
}

#[test]
fn help_alone_prefers_root_command_help() {
    let (mut registry, _) = demo_registry(true);
    registry.root = Some(Command::new("", |_| 0).usage("[-v]"));

    let run = dispatch(&registry, &["help"]);
    assert_eq!(run.out, "usage: demo [-v]\n");
}

#[test]
fn help_for_command() {
    let (registry, _) = demo_registry(true);
    let run = dispatch(&registry, &["help", "join"]);
    assert_eq!(run.result, Ok(0));
    assert!(run
        .out
        .starts_with("usage: demo join [-s=] \"a few\" distinct strings\n"));
    assert!(run.out.contains("\t-s, --separator\n"));
    assert!(run.out.contains("\tdemo join -s . google com\n"));
}

#[test]
fn help_for_topic() {
    let (registry, _) = demo_registry(true);
    let run = dispatch(&registry, &["help", "writing"]);
    assert_eq!(run.result, Ok(0));
    assert_eq!(run.out, "Use *stars*.\n");
}

// ============================================================================
// Termination
// ============================================================================

#[test]
fn unknown_help_topic() {
    let (registry, _) = demo_registry(true);
    let run = dispatch(&registry, &["help", "nothing"]);

    let termination = run.result.unwrap_err();
    assert_eq!(termination.status, 1);
    assert_snapshot!(run.err.trim_end(), @"demo: no such command or help topic");
}

#[test]
fn strict_parse_error_terminates_before_handler() {
    let (registry, calls) = demo_registry(true);
    let run = dispatch(&registry, &["join", "google"]);

    assert_eq!(
        run.result.unwrap_err().reason,
        TerminationReason::Parse(ParseError::UnexpectedArgument {
            argument: "google".into()
        })
    );
    assert!(calls.borrow().is_empty());
    assert_snapshot!(run.err.trim_end(), @"demo: no option name before argument google");
}

#[test]
fn unknown_command_lists_suggestions_in_registry_order() {
    let (registry, _) = demo_registry(true);
    // Two edits from both "join" and "list".
    let run = dispatch(&registry, &["jis"]);

    assert_eq!(
        run.result.unwrap_err().reason,
        TerminationReason::UnknownCommand {
            name: "jis".into(),
            suggestions: vec!["join".into(), "list".into()],
        }
    );
    assert_eq!(run.out, "Did you mean this?\n\tjoin\n\tlist\n\n");
    assert_snapshot!(run.err.trim_end(), @r#"demo: unknown subcommand "jis""#);
}
