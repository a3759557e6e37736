use crate::test_utils::{expect_valid, expect_valid_cst, expect_valid_raw};
use regex_pattern_core::{Element, Node};

#[test]
fn empty_pattern() {
    let res = expect_valid_cst("//");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements: []
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn single_character() {
    let res = expect_valid_cst("/2/");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: <Character '2'>
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn character_sequence() {
    let res = expect_valid_cst("/21/");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: <Character '2'>
        elements[1]: <Character '1'>
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn two_alternatives() {
    let res = expect_valid_cst("/1|2/");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: <Character '1'>
      separatorTokens[0]: <Punctuator '|'>
      alternatives[1]: Alternative
        elements[0]: <Character '2'>
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn empty_alternatives_are_kept() {
    let Node::Pattern(pattern) = expect_valid("/||a|/") else {
        panic!("expected a pattern");
    };

    assert_eq!(pattern.alternatives().len(), 4);
    assert_eq!(pattern.separator_tokens().len(), 3);
    let lengths: Vec<_> = pattern
        .alternatives()
        .iter()
        .map(|a| a.elements().len())
        .collect();
    assert_eq!(lengths, [0, 0, 1, 0]);
}

#[test]
fn stray_closers_and_operators_are_literal() {
    let Node::Pattern(pattern) = expect_valid("/)(]}^-,.$/") else {
        panic!("expected a pattern");
    };

    let elements = pattern.alternatives()[0].elements();
    assert_eq!(elements.len(), 9);
    let values: String = elements
        .iter()
        .map(|e| match e {
            Element::Character(c) => c.value(),
            other => panic!("expected a character, got {:?}", other.node_type()),
        })
        .collect();
    assert_eq!(values, ")(]}^-,.$");
}

#[test]
fn non_ascii_literal() {
    let res = expect_valid_cst("/é/");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: <Character 'é'>
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn raw_view() {
    let res = expect_valid_raw("/1|2/");

    insta::assert_snapshot!(res, @r#"
    Pattern
      PunctuatorToken "/"
      Alternative
        Character
          CharacterToken "1"
      PunctuatorToken "|"
      Alternative
        Character
          CharacterToken "2"
      PunctuatorToken "/"
      Flags
    "#);
}
