use crate::test_utils::{expect_valid, expect_valid_cst, expect_valid_flags};
use regex_pattern_core::{Flag, Node};

fn pattern_flags(source: &str) -> Vec<Flag> {
    let Node::Pattern(pattern) = expect_valid(source) else {
        panic!("expected a pattern");
    };
    pattern
        .flags()
        .iter()
        .filter_map(|(flag, set)| set.then_some(flag))
        .collect()
}

#[test]
fn single_flag() {
    let res = expect_valid_cst("//i");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements: []
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global ignoreCase !multiline !dotAll !unicode !sticky
        tokens[0]: <Keyword 'i'>
    ");
}

#[test]
fn flags_keep_source_order() {
    let res = expect_valid_cst("//mi");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements: []
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global ignoreCase multiline !dotAll !unicode !sticky
        tokens[0]: <Keyword 'm'>
        tokens[1]: <Keyword 'i'>
    ");
}

#[test]
fn attributes_follow_canonical_order() {
    assert_eq!(
        pattern_flags("/a/yusmig"),
        [
            Flag::Global,
            Flag::IgnoreCase,
            Flag::Multiline,
            Flag::DotAll,
            Flag::Unicode,
            Flag::Sticky,
        ]
    );
    assert!(pattern_flags("/a/").is_empty());
}

#[test]
fn standalone_flags() {
    let res = expect_valid_flags("gy");

    insta::assert_snapshot!(res, @r"
    Flags global !ignoreCase !multiline !dotAll !unicode sticky
      tokens[0]: <Keyword 'g'>
      tokens[1]: <Keyword 'y'>
    ");
}

#[test]
fn standalone_empty_flags() {
    let res = expect_valid_flags("");

    insta::assert_snapshot!(res, @r"
    Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
      tokens: []
    ");
}
