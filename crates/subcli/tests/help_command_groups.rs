//! Help output through the App facade: divisions, topics, flags, examples.

use insta::assert_snapshot;
use subcli::{App, Command, Example, Flag, HelpConfig, HelpMode, SharedBuffer, Streams, Topic};

fn app(mode: HelpMode) -> App {
    App::builder()
        .name("gopher")
        .brief("Gopher manages burrows.")
        .version("0.1")
        .help_config(HelpConfig::new().mode(mode))
        .command(Command::new("dig", |_| 0).brief("digs a burrow"))
        .command(
            Command::new("push", |_| 0)
                .brief("uploads a burrow")
                .division("Remote commands"),
        )
        .command(
            Command::new("fill", |_| 0)
                .brief("fills a burrow")
                .usage("[-f] burrow")
                .help("Fill closes the burrow for good.")
                .flag(
                    Flag::new("force")
                        .short("f")
                        .help("Do not ask for confirmation.")
                        .default_value("false"),
                )
                .flag(Flag::new("depth").usage("--depth=N"))
                .example(Example::new("-f north", "Fills the north burrow"))
                .example(Example::new("south", "")),
        )
        .command(
            Command::new("pull", |_| 0)
                .brief("downloads a burrow")
                .division("Remote commands"),
        )
        .topic(Topic::new("soil", "soil types", "Clay, loam and sand."))
        .build()
        .unwrap()
}

fn help_output(app: &App, argv: &[&str]) -> String {
    let (out, err) = (SharedBuffer::new(), SharedBuffer::new());
    let (mut out_w, mut err_w) = (out.clone(), err.clone());
    let mut streams = Streams::new(&mut out_w, &mut err_w);
    assert_eq!(app.run_with(argv.iter().copied(), &mut streams), Ok(0));
    assert!(err.is_empty());
    out.contents()
}

#[test]
fn global_help_groups_commands_by_division() {
    let text = help_output(&app(HelpMode::Plain), &["gopher", "help"]);

    let expected = "\
Gopher manages burrows.

Usage:

\tgopher command [arguments]

The commands are:

\tdig         digs a burrow
\tfill        fills a burrow

Remote commands:

\tpush        uploads a burrow
\tpull        downloads a burrow

Use \"gopher help [command]\" for more information about a command.

Additional help topics:

\tsoil        soil types

Use \"gopher help [topic]\" for more information about a topic.
";
    assert_eq!(text, expected);
}

#[test]
fn command_help_lists_flags_and_examples() {
    let text = help_output(&app(HelpMode::Plain), &["gopher", "help", "fill"]);

    let expected = "\
usage: gopher fill [-f] burrow

Fill closes the burrow for good.

The flags are:

\t-f, --force
\t\tDo not ask for confirmation.
\t\t(default: false)
\t--depth=N

Examples:

\tgopher fill -f north
\t\tFills the north burrow
\tgopher fill south
";
    assert_eq!(text, expected);
}

#[test]
fn command_help_without_details_is_one_line() {
    let text = help_output(&app(HelpMode::Plain), &["gopher", "help", "dig"]);
    assert_snapshot!(text.trim_end(), @"usage: gopher dig");
}

#[test]
fn styled_help_bolds_headings_only() {
    let styled = app(HelpMode::Styled).global_help();
    let plain = app(HelpMode::Plain).global_help();

    assert_ne!(styled, plain);
    assert!(styled.contains("\u{1b}[1m"));
    assert_eq!(console::strip_ansi_codes(&styled), plain);
}
