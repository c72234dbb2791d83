use super::*;

fn run(matcher: &Matcher, input: &str) -> (bool, usize) {
    let mut cursor = Cursor::new(input);
    let matched = matcher.match_run(&mut cursor);
    (matched, cursor.pos())
}

fn one(matcher: &Matcher, input: &str) -> (bool, usize) {
    let mut cursor = Cursor::new(input);
    let matched = matcher.match_one(&mut cursor);
    (matched, cursor.pos())
}

// === Leaves ===

#[test]
fn empty_matcher_never_matches() {
    let m = Matcher::new();
    assert!(m.is_empty());
    assert_eq!(one(&m, "abc"), (false, 0));
    assert_eq!(one(&m, ""), (false, 0));
}

#[test]
fn accept_runes_matches_members() {
    let m = Matcher::new().accept_runes("+-");
    assert_eq!(one(&m, "+1"), (true, 1));
    assert_eq!(one(&m, "-1"), (true, 1));
    assert_eq!(one(&m, "*1"), (false, 0));
}

#[test]
fn accept_runes_multibyte_members() {
    let m = Matcher::new().accept_runes("\u{3bb}\u{2192}");
    assert_eq!(one(&m, "\u{2192}x"), (true, 3));
}

#[test]
fn reject_runes_consumes_one_non_member() {
    let m = Matcher::new().reject_runes("\"\n");
    assert_eq!(one(&m, "ab"), (true, 1));
    assert_eq!(one(&m, "\"ab"), (false, 0));
}

#[test]
fn reject_runes_never_matches_eof() {
    let m = Matcher::new().reject_runes("");
    assert_eq!(one(&m, ""), (false, 0));
    assert_eq!(run(&m, "xyz"), (true, 3));
}

#[test]
fn unicode_range_is_inclusive() {
    let m = Matcher::new().accept_unicode_range('0', '9');
    assert_eq!(one(&m, "0"), (true, 1));
    assert_eq!(one(&m, "9"), (true, 1));
    assert_eq!(one(&m, "a"), (false, 0));
}

#[test]
fn inverted_range_matches_nothing() {
    let m = Matcher::new().accept_unicode_range('z', 'a');
    assert_eq!(one(&m, "m"), (false, 0));
}

#[test]
fn accept_string_is_all_or_nothing() {
    let m = Matcher::new().accept_string("<=");
    assert_eq!(one(&m, "<=x"), (true, 2));
    assert_eq!(one(&m, "<x"), (false, 0));
    assert_eq!(one(&m, "<"), (false, 0));
}

#[test]
fn empty_literal_matches_without_consuming() {
    let m = Matcher::new().accept_string("");
    assert_eq!(one(&m, "abc"), (true, 0));
    // A zero-width success ends the run instead of looping.
    assert_eq!(run(&m, "abc"), (true, 0));
}

// === Union ===

#[test]
fn union_short_circuits_on_first_success() {
    let any_one = Matcher::new().reject_runes("");
    let any_two = Matcher::new().accept_custom(|c: &mut Cursor<'_>| {
        c.next().is_some() && c.next().is_some()
    });
    let m = Matcher::new().union(&any_one).union(&any_two);
    for input in ["ab", "xyz", "\u{1F600}\u{1F600}"] {
        let mut cursor = Cursor::new(input);
        assert!(m.match_one(&mut cursor));
        assert_eq!(cursor.pending().chars().count(), 1, "input {input:?}");
    }
}

#[test]
fn union_falls_through_to_later_branch() {
    let digits = Matcher::new().accept_unicode_range('0', '9');
    let letters = Matcher::new().accept_unicode_range('a', 'z');
    let m = Matcher::new().union(&digits).union(&letters);
    assert_eq!(run(&m, "a1b2-"), (true, 4));
}

#[test]
fn union_captures_snapshot() {
    let digits = Matcher::new().accept_unicode_range('0', '9');
    let m = Matcher::new().union(&digits);
    let digits = digits.accept_runes("x");
    assert_eq!(one(&m, "x"), (false, 0));
    assert_eq!(one(&digits, "x"), (true, 1));
}

#[test]
fn union_with_empty_adds_nothing() {
    let m = Matcher::new().union(&Matcher::new());
    assert!(m.is_empty());
}

#[test]
fn fluent_chain_builds_one_union() {
    let ident_start = Matcher::new()
        .accept_unicode_range('a', 'z')
        .accept_unicode_range('A', 'Z')
        .accept_runes("_");
    assert_eq!(run(&ident_start, "Foo_bar9"), (true, 7));
}

// === MatchRun ===

#[test]
fn match_run_accumulates_across_iterations() {
    let m = Matcher::new().accept_runes("ab");
    let mut cursor = Cursor::new("abba c");
    assert!(m.match_run(&mut cursor));
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.peek(), Some(' '));
}

#[test]
fn match_run_without_match_is_false() {
    let m = Matcher::new().accept_runes("ab");
    assert_eq!(run(&m, " abba"), (false, 0));
}

#[test]
fn match_run_of_literals() {
    let m = Matcher::new().accept_string("ab");
    assert_eq!(run(&m, "ababa"), (true, 4));
}

// === Custom ===

struct Keyword(&'static str);

impl TextMatcher for Keyword {
    fn matches(&self, cursor: &mut Cursor<'_>) -> bool {
        cursor.eat_str(self.0) && !cursor.peek().is_some_and(char::is_alphanumeric)
    }
}

#[test]
fn custom_matcher_failure_is_restored() {
    let m = Matcher::new().accept_custom(Keyword("let"));
    assert_eq!(one(&m, "let x"), (true, 3));
    // eat_str succeeds, then the boundary check fails: the cursor rewinds.
    assert_eq!(one(&m, "letter"), (false, 0));
}

#[test]
fn matcher_is_a_text_matcher() {
    let inner = Matcher::new().accept_runes("x");
    let m = Matcher::new().accept_custom(inner);
    assert_eq!(run(&m, "xxy"), (true, 2));
}

#[test]
fn debug_renders_tree() {
    let m = Matcher::new()
        .accept_runes("ab")
        .union(&Matcher::new().accept_unicode_range('0', '9'));
    assert_eq!(format!("{m:?}"), "[Runes(\"ab\"), Union([Range('0'..='9')])]");
}

#[test]
fn matchers_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Matcher>();
}

// === Property tests ===

mod proptest_matcher {
    use super::super::*;
    use proptest::prelude::*;

    fn matchers() -> Vec<Matcher> {
        vec![
            Matcher::new(),
            Matcher::new().accept_runes("ab\u{e9}"),
            Matcher::new().reject_runes("ab\u{e9}"),
            Matcher::new().accept_unicode_range('0', '9'),
            Matcher::new().accept_string("ab"),
            Matcher::new().accept_string("\u{e9}\u{e9}"),
            Matcher::new()
                .accept_string("abc")
                .union(&Matcher::new().accept_runes("z")),
            Matcher::new().accept_custom(|c: &mut Cursor<'_>| {
                c.next();
                c.next() == Some('!')
            }),
        ]
    }

    proptest! {
        #[test]
        fn failed_match_leaves_cursor_unchanged(
            input in "[ab\u{e9}0-9z! ]{0,12}",
            steps in 0usize..6,
        ) {
            for m in matchers() {
                let mut cursor = Cursor::new(&input);
                for _ in 0..steps {
                    cursor.next();
                }
                let before = cursor.checkpoint();
                if !m.match_one(&mut cursor) {
                    prop_assert_eq!(cursor.checkpoint(), before, "matcher {:?}", m);
                }
            }
        }

        #[test]
        fn match_run_never_moves_start(input in "[ab\u{e9}0-9z! ]{0,12}") {
            for m in matchers() {
                let mut cursor = Cursor::new(&input);
                m.match_run(&mut cursor);
                prop_assert_eq!(cursor.start(), 0);
                prop_assert!(cursor.pos() <= input.len());
            }
        }
    }
}
