//! The variable parser: raw tokens to flag bindings.
//!
//! One left-to-right scan. A token starting with `-` opens a flag; any
//! number of leading dashes is accepted, so `-f`, `--force` and `---force`
//! are the same thing. The flag name may carry an inline value after the
//! first `=`. Without an inline value the flag folds every following
//! non-dash token into a single space-joined value:
//!
//! ```text
//! --slug dog_03 Dog Doggson   =>  slug = "dog_03 Dog Doggson"
//! --force                     =>  force = ""
//! --filter= ignored           =>  filter = ""   (the `=` stops folding)
//! ```
//!
//! There is no quoting syntax. Keys in the result are always canonical flag
//! names, whichever alias was typed, and a repeated flag keeps its last value.

use std::collections::HashMap;

use tracing::trace;

use crate::command::Flag;
use crate::error::{ParseError, Result};

/// Canonical flag name to raw string value, one entry per flag seen.
pub type Bindings = HashMap<String, String>;

/// Parses `tokens` (subcommand name already stripped) against `flags`.
///
/// In strict mode a bare argument fails with
/// [`ParseError::UnexpectedArgument`] and an undeclared flag with
/// [`ParseError::UnknownFlag`]. In lenient mode neither can happen: bare
/// arguments are skipped and undeclared flags are bound under the name as
/// typed.
///
/// # Example
///
/// ```rust
/// use subcli_dispatch::{parse_variables, Flag};
///
/// let flags = [Flag::new("separator").short("s")];
/// let vars = parse_variables(true, &flags, &["-s", ".", "google", "com"]).unwrap();
/// assert_eq!(vars["separator"], ". google com");
/// ```
pub fn parse_variables<S: AsRef<str>>(
    strict: bool,
    flags: &[Flag],
    tokens: &[S],
) -> Result<Bindings> {
    let mut vars = Bindings::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_ref();
        i += 1;

        if !is_flag_token(token) {
            if strict {
                return Err(ParseError::UnexpectedArgument {
                    argument: token.to_string(),
                });
            }
            trace!(argument = token, "skipping positional argument");
            continue;
        }

        let stripped = token.trim_start_matches('-');
        let (name, inline) = match stripped.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (stripped, None),
        };

        let canonical = match resolve_flag(flags, name) {
            Some(flag) => flag.name.clone(),
            None if strict => {
                return Err(ParseError::UnknownFlag {
                    name: name.to_string(),
                })
            }
            None => {
                trace!(flag = name, "recording undeclared flag");
                name.to_string()
            }
        };

        let value = match inline {
            Some(value) => value.to_string(),
            None => {
                let mut value = String::new();
                while let Some(next) = tokens.get(i) {
                    let next: &str = next.as_ref();
                    if is_flag_token(next) {
                        break;
                    }
                    value.push(' ');
                    value.push_str(next);
                    i += 1;
                }
                value
            }
        };

        vars.insert(canonical, value.trim_start_matches(' ').to_string());
    }

    Ok(vars)
}

/// Finds the declaration whose name or short alias is exactly `name`.
pub fn resolve_flag<'a>(flags: &'a [Flag], name: &str) -> Option<&'a Flag> {
    flags.iter().find(|flag| flag.matches(name))
}

pub(crate) fn is_flag_token(token: &str) -> bool {
    token.starts_with('-')
}
