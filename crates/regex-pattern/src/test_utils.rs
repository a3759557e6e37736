//! Test helpers shared by the snapshot tests.

use regex_pattern_core::{Node, SyntaxTree, check_balance};

use crate::{CstPrinter, Production, Template, parse};

/// Parses `template`, checks the tree invariants every valid parse must hold,
/// and returns the node.
pub fn expect_valid_template(template: &Template, production: Production) -> Node {
    let node = match parse(template, production) {
        Ok(node) => node,
        Err(err) => panic!("expected valid input, got error: {err}"),
    };
    check_balance(&node).expect("parsed tree must be balanced");
    node
}

pub fn expect_valid(source: &str) -> Node {
    let node = expect_valid_template(&Template::new(source), Production::Pattern);
    assert_eq!(node.text(), source, "parsed tree must reproduce its source");
    node
}

pub fn expect_valid_cst(source: &str) -> String {
    CstPrinter::new(&expect_valid(source)).dump()
}

pub fn expect_valid_raw(source: &str) -> String {
    CstPrinter::new(&expect_valid(source)).raw(true).dump()
}

pub fn expect_valid_flags(source: &str) -> String {
    let node = expect_valid_template(&Template::new(source), Production::Flags);
    assert_eq!(node.text(), source, "parsed flags must reproduce their source");
    CstPrinter::new(&node).dump()
}

pub fn expect_template_cst(template: &Template) -> String {
    CstPrinter::new(&expect_valid_template(template, Production::Pattern)).dump()
}

/// Returns the error's `Display` line.
pub fn expect_invalid(source: &str) -> String {
    expect_invalid_template(&Template::new(source))
}

pub fn expect_invalid_template(template: &Template) -> String {
    match parse(template, Production::Pattern) {
        Ok(node) => panic!(
            "expected an error, got a tree:\n{}",
            CstPrinter::new(&node).dump()
        ),
        Err(err) => err.to_string(),
    }
}
