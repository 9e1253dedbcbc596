//! The argument context handed to command handlers.
//!
//! [`Args`] owns the flag bindings of one invocation. Every value is stored as
//! the raw string the parser produced; the typed accessors convert on demand.

use std::collections::HashMap;

use crate::error::ValueError;
use crate::parse::Bindings;

/// Flags and values of one command call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    vars: Bindings,
}

impl Args {
    /// Wraps bindings produced by [`parse_variables`](crate::parse_variables).
    pub fn from_bindings(vars: Bindings) -> Self {
        Self { vars }
    }

    /// Returns the raw value of a flag, or `None` if it was not given.
    pub fn get(&self, flag_name: &str) -> Option<&str> {
        self.vars.get(flag_name).map(String::as_str)
    }

    /// Returns true if the flag appeared on the command line.
    pub fn has(&self, flag_name: &str) -> bool {
        self.vars.contains_key(flag_name)
    }

    /// Returns the flag's value, or an empty string if it was not given.
    pub fn string(&self, flag_name: &str) -> String {
        self.get(flag_name).unwrap_or_default().to_string()
    }

    /// Interprets the flag as a boolean.
    ///
    /// A bare presence flag (`--force`) is true. Explicit values accept
    /// `1/t/true/on` and `0/f/false/off` in their usual capitalisations;
    /// anything else, and an absent flag, is false.
    pub fn bool(&self, flag_name: &str) -> bool {
        match self.get(flag_name) {
            None => false,
            Some("") => true,
            Some(value) => parse_bool(value).unwrap_or(false),
        }
    }

    /// Interprets the flag as an integer, reporting why it could not.
    ///
    /// The base follows the value's prefix: `0x` hex, `0b` binary, `0o` or a
    /// bare leading `0` octal, decimal otherwise.
    pub fn try_int64(&self, flag_name: &str) -> Result<i64, ValueError> {
        let value = self.get(flag_name).ok_or_else(|| ValueError::Missing {
            name: flag_name.to_string(),
        })?;
        parse_int(value).ok_or_else(|| ValueError::InvalidInt {
            name: flag_name.to_string(),
            value: value.to_string(),
        })
    }

    /// Like [`try_int64`](Self::try_int64), but yields 0 on any failure.
    pub fn int64(&self, flag_name: &str) -> i64 {
        self.try_int64(flag_name).unwrap_or(0)
    }

    /// Like [`int64`](Self::int64), narrowed to the platform integer.
    pub fn int(&self, flag_name: &str) -> isize {
        isize::try_from(self.int64(flag_name)).unwrap_or(0)
    }

    /// All bindings, keyed by canonical flag name.
    pub fn variables(&self) -> &HashMap<String, String> {
        &self.vars
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" | "on" | "ON" | "On" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" | "off" | "OFF" | "Off" => Some(false),
        _ => None,
    }
}

/// Parses an integer literal with an optional sign and base prefix.
///
/// Underscores may separate digits only when a base prefix is present.
fn parse_int(value: &str) -> Option<i64> {
    let (negative, body) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let (radix, digits) = if let Some(rest) = strip_prefix_ci(body, "0x") {
        (16, rest)
    } else if let Some(rest) = strip_prefix_ci(body, "0b") {
        (2, rest)
    } else if let Some(rest) = strip_prefix_ci(body, "0o") {
        (8, rest)
    } else if body.len() > 1 && body.starts_with('0') {
        (8, &body[1..])
    } else {
        (10, body)
    };

    let digits = if radix == 10 {
        digits.to_string()
    } else {
        digits.replace('_', "")
    };
    // from_str_radix would accept a second sign
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = u64::from_str_radix(&digits, radix).ok()?;
    if negative {
        if magnitude > i64::MAX as u64 + 1 {
            return None;
        }
        Some((magnitude as i64).wrapping_neg())
    } else {
        i64::try_from(magnitude).ok()
    }
}

fn strip_prefix_ci<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    let head = value.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&value[prefix.len()..])
    } else {
        None
    }
}
