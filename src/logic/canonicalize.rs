//! Name canonicalization: turn free-text name lists into unique, ordered names.

use std::collections::{HashMap, HashSet};

/// Known misspellings mapped to their canonical form. Lookup ignores case.
/// Empty unless the caller opts into a table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AliasTable {
    aliases: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `alias` to be rewritten as `canonical`.
    pub fn insert(&mut self, alias: &str, canonical: impl Into<String>) {
        self.aliases
            .insert(dedupe_key(&collapse_whitespace(alias)), canonical.into());
    }

    /// Club-name typos and short forms seen in past entry lists.
    pub fn legacy_clubs() -> Self {
        let mut table = Self::new();
        for (alias, canonical) in [
            ("Anderlect", "Anderlecht"),
            ("Atletico Madrid", "Atlético Madrid"),
            ("Bayern Munich", "Bayern München"),
            ("Besiktas", "Beşiktaş"),
            ("Dortmund", "Borussia Dortmund"),
            ("Leverkusen", "Bayer Leverkusen"),
            ("Man City", "Manchester City"),
            ("Milan", "AC Milan"),
            ("Monchengladbach", "Borussia Mönchengladbach"),
            ("Sc Internacional", "SC Internacional"),
            ("Sevlle", "Sevilla"),
            ("Tottenham", "Tottenham Hotspur"),
        ] {
            table.insert(alias, canonical);
        }
        table
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases
            .get(&dedupe_key(name))
            .map(String::as_str)
            .unwrap_or(name)
    }
}

/// Canonicalize a list of raw lines.
///
/// 1. Trim and collapse internal whitespace runs to one space.
/// 2. Drop empty lines.
/// 3. Rewrite known aliases.
/// 4. Keep the first spelling of each case-insensitive duplicate.
pub fn canonicalize<S: AsRef<str>>(lines: &[S], aliases: &AliasTable) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for raw in lines {
        let collapsed = collapse_whitespace(raw.as_ref());
        if collapsed.is_empty() {
            continue;
        }
        let name = aliases.resolve(&collapsed);
        if seen.insert(dedupe_key(name)) {
            out.push(name.to_string());
        }
    }
    out
}

/// Canonicalize a newline-delimited blob (e.g. a pasted entry list).
pub fn canonicalize_text(text: &str, aliases: &AliasTable) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    canonicalize(&lines, aliases)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn dedupe_key(s: &str) -> String {
    s.to_lowercase()
}
