//! Hard-coded rewrite tables for the migrated history.
//!
//! Compiled once on first use and read-only afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Hand-written messages for specific revisions.
///
/// Single-line entries carry no terminator; multi-line entries are a title,
/// a blank separator and the body, or a structured body of their own.
const OVERRIDE_ENTRIES: &[(&str, &[&str])] = &[
    ("2", &["Added columns plugin"]),
    (
        "11",
        &[
            "+ Application request parsing\n",
            "+ Indication of applied matches\n",
        ],
    ),
    ("38", &["Version update"]),
    ("40", &["Updated formatting and comments"]),
    ("90", &["Clean-up"]),
    ("156", &["More spaces"]),
    (
        "304",
        &[
            "Fixed general settings (issue 7)\n\n",
            "Settings from the general configuration section were ignored\n",
        ],
    ),
    ("313", &["Initial commit"]),
    ("322", &["Fixed PHP5 syntax"]),
    (
        "353",
        &[
            "Removed definition of DOKU_PLUGIN\n\n",
            "It should be already defined when plugin is loaded\n",
        ],
    ),
    (
        "354",
        &[
            "Fixed first reference instruction lookup\n\n",
            "Look for the first reference instruction i.s.o. assuming\n",
            "that it will be the first one in the calls array.\n",
        ],
    ),
    ("401", &["Fixed JSON corruprion by webhost servers"]),
    ("466", &["Added BibTeX parser"]),
    ("488", &["Move version information to plugin.info.txt"]),
    ("498", &["Added 'month' field support"]),
    ("504", &["Updated includes"]),
];

pub static OVERRIDES: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| OVERRIDE_ENTRIES.iter().copied().collect());

/// Lines that carry no information of their own, in match priority order
const MINOR_PATTERNS: &[&str] = &[
    r"^\s*$",
    r"^. Typo\n$",
    r"^. Spaces\n$",
    r"^. Version\n$",
    r"^. Clean-up\n$",
    r"^. Comments\n$",
    r"^. Formatting\n$",
    r"^. Naming\n$",
];

pub static MINORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    MINOR_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid minor pattern"))
        .collect()
});

/// Substitutions over `"<revision>:<line>"`.
///
/// Every pattern is anchored on the revision prefix and consumes the line
/// terminator, so once one fires the rest no longer match.
const TITLE_PATTERNS: &[(&str, &str)] = &[
    (r"^(?:20|26|128|135|290|300|302):. (.+)\n", "${1}"),
    (
        r"^\d+:! ((?:Allow|Ensure|Fix|Fixed|Make|Prevent|Reset|Suppress|Verify) .+)\n",
        "${1}",
    ),
    (r"^\d+:\+ (Added .+)\n", "${1}"),
    (r"^\d+:- (Removed .+)\n", "${1}"),
    (r"^\d+:\* Comments\n", "Updated comments"),
    (r"^\d+:\* Naming\n", "Updated naming"),
    (r"(?i)^\d+:\* Version\n", "Version update"),
    (r"^\d+:\* Version info\n", "Version update"),
    (r"^\d+:\+ (\w)(.+)\n", "Added <${1}>${2}"),
    (r"^\d+:! (\w)(.+)\n", "Fixed <${1}>${2}"),
    (r"^\d+:- (\w)(.+)\n", "Removed <${1}>${2}"),
    (r"^\d+:\* (.+)\n", "${1}"),
];

pub static TITLE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    TITLE_PATTERNS
        .iter()
        .map(|(pattern, template)| {
            (
                Regex::new(pattern).expect("Invalid title pattern"),
                *template,
            )
        })
        .collect()
});

/// `<W>` left behind by the generic rules, lower-cased afterwards
pub static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(\w)>").expect("Invalid placeholder regex"));

/// Look up the hand-written replacement for `revision`
pub fn override_for(revision: &str) -> Option<&'static [&'static str]> {
    OVERRIDES.get(revision).copied()
}
