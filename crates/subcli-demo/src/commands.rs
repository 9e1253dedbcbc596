//! The demo's commands.

use subcli::{App, Args, Command, Example, Flag, SetupError, Topic};
use tracing::debug;

pub fn app() -> Result<App, SetupError> {
    App::builder()
        .name("demo")
        .brief("Demo is a funky demonstration of subcli capabilities.")
        .version(env!("CARGO_PKG_VERSION"))
        .command(join_command())
        .command(repeat_command())
        .topic(Topic::new(
            "values",
            "how flag values are read",
            "A flag takes every following word up to the next flag:\n\n\
             \tdemo join -s , a b c\n\n\
             binds separator to \", a b c\". Write --flag=value to stop after one word.",
        ))
        .build()
}

fn join_command() -> Command {
    Command::new("join", |args: &Args| match args.get("separator") {
        Some(value) => {
            println!("{}", join(value));
            0
        }
        None => {
            println!("separator not specified");
            1
        }
    })
    .brief("merges the strings given")
    .usage("[-s=] \"a few\" distinct strings")
    .help("Joins every word after the separator with the separator.")
    .flag(
        Flag::new("separator")
            .short("s")
            .usage("--separator=\".\"")
            .help("Put some separating string between all the strings given."),
    )
    .example(Example::new("-s . google com", "Results in \"google.com\""))
}

fn repeat_command() -> Command {
    Command::new("repeat", |args: &Args| {
        let times = if args.has("times") {
            match args.try_int64("times") {
                Ok(times) => times,
                Err(err) => {
                    eprintln!("demo: {}", err);
                    return 2;
                }
            }
        } else {
            1
        };
        debug!(times, "repeating");
        println!("{}", repeat(&args.string("text"), times));
        0
    })
    .brief("prints a word several times")
    .usage("[-n=count] -t word")
    .division("Extras")
    .flag(Flag::new("times").short("n").default_value("1").help("How many copies."))
    .flag(Flag::new("text").short("t").help("What to repeat."))
    .example(Example::new("-n 3 -t ha", "Prints \"hahaha\""))
}

/// Splits `value` on spaces and joins the rest with the first word.
fn join(value: &str) -> String {
    let mut parts = value.split(' ');
    let separator = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();
    if rest.is_empty() {
        separator.to_string()
    } else {
        rest.join(separator)
    }
}

fn repeat(text: &str, times: i64) -> String {
    text.repeat(usize::try_from(times).unwrap_or(0))
}
