use crate::test_utils::{expect_valid, expect_valid_cst};
use regex_pattern_core::{CharacterClass, ClassElement, Element, Node};

fn first_class(source: &str) -> CharacterClass {
    let Node::Pattern(pattern) = expect_valid(source) else {
        panic!("expected a pattern");
    };
    match &pattern.alternatives()[0].elements()[0] {
        Element::CharacterClass(class) => class.clone(),
        other => panic!("expected a class, got {:?}", other.node_type()),
    }
}

fn shape(class: &CharacterClass) -> Vec<&'static str> {
    class
        .elements()
        .iter()
        .map(|e| match e {
            ClassElement::Character(_) => "char",
            ClassElement::Range(_) => "range",
            ClassElement::WordCharacterSet(_) => "word",
        })
        .collect()
}

#[test]
fn lone_minus() {
    let res = expect_valid_cst("/[-]/");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: CharacterClass !negate
          openToken: <Punctuator '[' balanced=']' balancedSpan='CharacterClass'>
          negateToken: null
          elements[0]: <Character '-'>
          closeToken: <Punctuator ']' balancer>
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn two_minuses_are_characters() {
    let res = expect_valid_cst("/[--]/");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: CharacterClass !negate
          openToken: <Punctuator '[' balanced=']' balancedSpan='CharacterClass'>
          negateToken: null
          elements[0]: <Character '-'>
          elements[1]: <Character '-'>
          closeToken: <Punctuator ']' balancer>
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn three_minuses_form_a_range() {
    let res = expect_valid_cst("/[---]/");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: CharacterClass !negate
          openToken: <Punctuator '[' balanced=']' balancedSpan='CharacterClass'>
          negateToken: null
          elements[0]: CharacterClassRange
            min: <Character '-'>
            sigilToken: <Punctuator '-'>
            max: <Character '-'>
          closeToken: <Punctuator ']' balancer>
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn negated_range() {
    let res = expect_valid_cst("/[^a-z]/");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: CharacterClass negate
          openToken: <Punctuator '[' balanced=']' balancedSpan='CharacterClass'>
          negateToken: <Punctuator '^'>
          elements[0]: CharacterClassRange
            min: <Character 'a'>
            sigilToken: <Punctuator '-'>
            max: <Character 'z'>
          closeToken: <Punctuator ']' balancer>
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn empty_class() {
    let class = first_class("/[]/");

    assert!(!class.negate());
    assert!(class.elements().is_empty());
}

#[test]
fn empty_negated_class() {
    let class = first_class("/[^]/");

    assert!(class.negate());
    assert!(class.elements().is_empty());
}

#[test]
fn caret_after_first_position_is_literal() {
    let class = first_class("/[a^]/");

    assert!(!class.negate());
    assert_eq!(shape(&class), ["char", "char"]);
}

#[test]
fn pattern_punctuators_are_literal_inside() {
    let class = first_class("/[/|+*?{}()]/");

    assert_eq!(shape(&class).len(), 9);
    assert!(shape(&class).iter().all(|s| *s == "char"));
}

#[test]
fn trailing_minus_is_literal() {
    let class = first_class("/[a-]/");

    assert_eq!(shape(&class), ["char", "char"]);
}

#[test]
fn minus_before_word_set_is_literal() {
    let class = first_class(r"/[a-\w]/");

    assert_eq!(shape(&class), ["char", "char", "word"]);
}

#[test]
fn reversed_range_is_accepted() {
    let class = first_class("/[z-a]/");

    let ClassElement::Range(range) = &class.elements()[0] else {
        panic!("expected a range");
    };
    assert_eq!(range.min().value(), 'z');
    assert_eq!(range.max().value(), 'a');
}

#[test]
fn range_with_escaped_bounds() {
    let class = first_class(r"/[\]-\n]/");

    let ClassElement::Range(range) = &class.elements()[0] else {
        panic!("expected a range");
    };
    assert_eq!(range.min().value(), ']');
    assert_eq!(range.max().value(), '\n');
}

#[test]
fn consecutive_ranges() {
    let class = first_class("/[a-z0-9_]/");

    assert_eq!(shape(&class), ["range", "range", "char"]);
}
