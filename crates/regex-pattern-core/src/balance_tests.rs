use crate::{
    Alternative, BalanceError, Character, CharacterClass, ClassElement, Element, EscapeSequence,
    Flags, Pattern, SpanName, SpanStack, Token, check_balance,
};

fn escaped(code: &str) -> Character {
    Character::Escaped(EscapeSequence::new(
        code.chars().next().unwrap(),
        Token::punctuator("\\").with_open_span(SpanName::Escape),
        Token::keyword(code).with_close_span(SpanName::Escape),
    ))
}

#[test]
fn nested_spans_balance() {
    let class = CharacterClass::new(
        Token::punctuator("[").with_balanced(']', SpanName::CharacterClass),
        None,
        vec![ClassElement::Character(escaped("]"))],
        Token::punctuator("]").as_balancer(),
    );
    let pattern = Pattern::new(
        Token::punctuator("/").with_balanced('/', SpanName::Pattern),
        vec![Alternative::new(vec![Element::CharacterClass(class)])],
        Vec::new(),
        Token::punctuator("/").as_balancer(),
        Flags::empty(),
    );

    assert_eq!(check_balance(&pattern), Ok(()));
}

#[test]
fn stack_tracks_depth() {
    let mut stack = SpanStack::new();
    stack
        .push(&Token::punctuator("/").with_balanced('/', SpanName::Pattern))
        .unwrap();
    stack
        .push(&Token::punctuator("[").with_balanced(']', SpanName::CharacterClass))
        .unwrap();
    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.innermost(), Some(SpanName::CharacterClass));

    stack.push(&Token::punctuator("]").as_balancer()).unwrap();
    assert_eq!(stack.innermost(), Some(SpanName::Pattern));
    assert_eq!(
        stack.finish(),
        Err(BalanceError::Unclosed {
            span: SpanName::Pattern
        })
    );
}

#[test]
fn closer_must_match_innermost_span() {
    let mut stack = SpanStack::new();
    stack
        .push(&Token::punctuator("/").with_balanced('/', SpanName::Pattern))
        .unwrap();
    stack
        .push(&Token::punctuator("[").with_balanced(']', SpanName::CharacterClass))
        .unwrap();

    let err = stack.push(&Token::punctuator("/").as_balancer()).unwrap_err();
    assert_eq!(
        err,
        BalanceError::Mismatched {
            index: 2,
            open: SpanName::CharacterClass,
            text: "/".to_string(),
        }
    );
    insta::assert_snapshot!(err.to_string(), @"token 2 (`/`) cannot close the open `CharacterClass` span");
}

#[test]
fn balancer_without_opener() {
    let mut stack = SpanStack::new();
    let err = stack.push(&Token::punctuator("]").as_balancer()).unwrap_err();
    assert_eq!(
        err,
        BalanceError::Unmatched {
            index: 0,
            text: "]".to_string(),
        }
    );
}

#[test]
fn escape_span_closes_by_name() {
    let mut stack = SpanStack::new();
    stack
        .push(&Token::punctuator("\\").with_open_span(SpanName::Escape))
        .unwrap();
    assert_eq!(stack.innermost(), Some(SpanName::Escape));
    stack
        .push(&Token::keyword("n").with_close_span(SpanName::Escape))
        .unwrap();
    assert_eq!(stack.finish(), Ok(()));
}
