// tests/rewrite_test.rs
use svn_msg_rewrite::{rewrite, Outcome, RewriteError};

const UUID: &str = "7e4a1b2c-0d3e-4f5a-8b6c-9d0e1f2a3b4c";

fn footer(revision: u32) -> String {
    format!(
        "git-svn-id: https://svn.example.org/refnotes/trunk@{} {}\n",
        revision, UUID
    )
}

fn message(body: &[&str], revision: u32) -> String {
    let mut text = body.concat();
    text.push_str(&footer(revision));
    text
}

#[test]
fn test_override_replaces_structured_body() {
    let result = rewrite(&message(&["* Comments\n", "\n"], 504)).unwrap();
    assert_eq!(result.revision.as_str(), "504");
    assert_eq!(result.render(), "r504: Updated includes");
    assert_eq!(result.outcome, Outcome::Override);
}

#[test]
fn test_override_ignores_body_content() {
    for body in [
        &["Initial import\n", "\n"][..],
        &["+ A\n", "- B\n", "\n"][..],
        &["! Something.\n", "\n"][..],
    ] {
        let result = rewrite(&message(body, 313)).unwrap();
        assert_eq!(result.render(), "r313: Initial commit");
    }
}

#[test]
fn test_override_with_body() {
    let result = rewrite(&message(&["* Fixed lookup\n", "\n"], 354)).unwrap();
    assert_eq!(
        result.render(),
        "r354: Fixed first reference instruction lookup\n\n\
         Look for the first reference instruction i.s.o. assuming\n\
         that it will be the first one in the calls array.\n"
    );
}

#[test]
fn test_structured_title_is_translated() {
    let result = rewrite(&message(&["+ Added thing\n", "\n"], 999)).unwrap();
    assert_eq!(result.render(), "r999: Added thing");
    assert_eq!(result.outcome, Outcome::Titled);
}

#[test]
fn test_minor_lines_are_dropped_before_translation() {
    let body = ["* Formatting\n", "! Wrong anchor for notes\n", "* Typo\n", "\n"];
    let result = rewrite(&message(&body, 1200)).unwrap();
    assert_eq!(result.render(), "r1200: Fixed wrong anchor for notes");
}

#[test]
fn test_empty_body() {
    let result = rewrite(&footer(42)).unwrap();
    assert_eq!(result.render(), "r42");
    assert_eq!(result.outcome, Outcome::Empty);

    let result = rewrite(&message(&["\n", "\n"], 42)).unwrap();
    assert_eq!(result.render(), "r42");
}

#[test]
fn test_unreducible_body_is_preserved() {
    let result = rewrite(&message(&["+ A\n", "- B\n", "\n"], 777)).unwrap();
    assert_eq!(result.render(), "r777\n\n+ A\n- B\n");
    assert_eq!(result.outcome, Outcome::Preserved);
}

#[test]
fn test_untranslatable_title_keeps_minor_lines() {
    let result = rewrite(&message(&["+ X\n", "* Typo\n", "\n"], 5)).unwrap();
    assert_eq!(result.render(), "r5\n\n+ X\n* Typo\n");
    assert_eq!(result.outcome, Outcome::Preserved);
}

#[test]
fn test_prose_message_gets_inline_title() {
    let body = ["Reworked reference database.\n", "\n", "Keeps notes sorted.\n", "\n"];
    let result = rewrite(&message(&body, 610)).unwrap();
    assert_eq!(
        result.render(),
        "r610: Reworked reference database\n\nKeeps notes sorted.\n"
    );
    assert_eq!(result.outcome, Outcome::Prose);
}

#[test]
fn test_output_always_starts_with_revision_marker() {
    let bodies: [&[&str]; 6] = [
        &[],
        &["\n"],
        &["Plain title\n", "\n"],
        &["* Spaces\n", "\n"],
        &["+ X\n", "\n"],
        &["- Old API\n", "* Comments\n", "! Leak\n", "\n"],
    ];

    for body in bodies {
        let result = rewrite(&message(body, 321)).unwrap();
        assert!(
            result.render().starts_with("r321"),
            "unexpected output {:?} for {:?}",
            result.render(),
            body
        );
    }
}

#[test]
fn test_missing_footer_fails() {
    for input in ["", "\n", "Fixed bug\n\n", "Fixed bug\n\ngit-svn-id: https://x/trunk abc\n"] {
        let err = rewrite(input).unwrap_err();
        assert!(matches!(err, RewriteError::MissingRevision(_)), "{input:?}");
    }
}
