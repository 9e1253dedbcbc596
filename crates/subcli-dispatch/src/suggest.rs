//! "Did you mean" suggestions for mistyped subcommand names.

use strsim::osa_distance;

/// Maximum edit distance for a name to count as a likely typo.
pub const SUGGESTION_DISTANCE: usize = 2;

/// Returns the names that plausibly correct `typed`, in the order given.
///
/// A name qualifies when `typed` is a case-insensitive prefix of it, or when
/// the two are within [`SUGGESTION_DISTANCE`] edits of each other. Edits are
/// insertions, deletions, substitutions and swaps of adjacent characters,
/// compared case-sensitively. The result is not ranked or truncated.
///
/// ```rust
/// use subcli_dispatch::suggestions_for;
///
/// let names = ["build", "install", "list"];
/// assert_eq!(suggestions_for("buld", names), vec!["build"]);
/// assert_eq!(suggestions_for("INS", names), vec!["install"]);
/// assert!(suggestions_for("zzz", names).is_empty());
/// ```
pub fn suggestions_for<'a, I>(typed: &str, names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let typed_lower = typed.to_lowercase();
    names
        .into_iter()
        .filter(|name| {
            name.to_lowercase().starts_with(&typed_lower)
                || osa_distance(typed, name) <= SUGGESTION_DISTANCE
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 3] = ["build", "install", "list"];

    #[test]
    fn test_single_edit() {
        assert_eq!(suggestions_for("buld", NAMES), vec!["build"]);
        assert_eq!(suggestions_for("lsit", NAMES), vec!["list"]);
    }

    #[test]
    fn test_adjacent_swap_counts_once() {
        // Two swaps each; plain Levenshtein needs three and four edits.
        assert_eq!(suggestions_for("ublid", ["build"]), vec!["build"]);
        assert_eq!(suggestions_for("nistlal", ["install"]), vec!["install"]);
    }

    #[test]
    fn test_prefix_is_case_insensitive() {
        assert_eq!(suggestions_for("INST", NAMES), vec!["install"]);
        assert_eq!(suggestions_for("in", NAMES), vec!["install"]);
    }

    #[test]
    fn test_distance_is_case_sensitive() {
        // "LXST" is four substitutions away from "list" and not a prefix match.
        assert!(suggestions_for("LXST", NAMES).is_empty());
    }

    #[test]
    fn test_far_typo_yields_nothing() {
        assert!(suggestions_for("zzz", NAMES).is_empty());
        assert!(suggestions_for("qwerty", NAMES).is_empty());
    }

    #[test]
    fn test_registry_order_preserved() {
        let names = ["list", "lint", "link"];
        assert_eq!(suggestions_for("lin", names), vec!["list", "lint", "link"]);
    }

    #[test]
    fn test_exact_threshold() {
        assert_eq!(suggestions_for("bxxld", ["build"]), vec!["build"]);
        assert!(suggestions_for("bxxxd", ["build"]).is_empty());
    }
}
