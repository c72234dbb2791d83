use super::*;

#[test]
fn grammar_error_construction() {
    let err = LexError::grammar("unexpected '?'", Span::new(3, 4));
    assert_eq!(
        err.kind,
        LexErrorKind::Grammar {
            message: "unexpected '?'".to_owned()
        }
    );
    assert_eq!(err.span, Span::new(3, 4));
    assert_eq!(err.message(), "unexpected '?'");
}

#[test]
fn display_includes_location() {
    let err = LexError::grammar("bad digit", Span::new(5, 6));
    assert_eq!(err.to_string(), "bad digit at 5..6");
}

#[test]
fn stalled_error_message() {
    let err = LexError::stalled(8, Span::point(2));
    assert_eq!(err.message(), "no progress after 8 state transitions");
    assert_eq!(err.to_string(), "no progress after 8 state transitions at 2..2");
}

#[test]
fn error_equality() {
    let a = LexError::grammar("x", Span::new(0, 1));
    let b = LexError::grammar("x", Span::new(0, 1));
    let c = LexError::stalled(1, Span::new(0, 1));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<LexError>();
}
