use crate::{Flag, Flags, Token};

#[test]
fn letters_map_to_canonical_flags() {
    let letters: String = Flag::ALL.iter().map(|f| f.letter()).collect();
    assert_eq!(letters, "gimsuy");

    assert_eq!(Flag::from_letter('i'), Some(Flag::IgnoreCase));
    assert_eq!(Flag::from_letter('s'), Some(Flag::DotAll));
    assert_eq!(Flag::from_letter('y'), Some(Flag::Sticky));
    assert_eq!(Flag::from_letter('x'), None);
    assert_eq!(Flag::from_letter('G'), None);
}

#[test]
fn names_use_attribute_spelling() {
    let names: Vec<_> = Flag::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        ["global", "ignoreCase", "multiline", "dotAll", "unicode", "sticky"]
    );
    insta::assert_snapshot!(Flag::IgnoreCase.to_string(), @"ignoreCase");
}

#[test]
fn index_follows_canonical_order() {
    for (i, flag) in Flag::ALL.iter().enumerate() {
        assert_eq!(flag.index(), i);
    }
}

#[test]
fn flags_keep_source_order_but_report_canonical_order() {
    let flags = Flags::new(vec![Token::keyword("m"), Token::keyword("i")]);

    let texts: Vec<_> = flags.tokens().iter().map(|t| t.text()).collect();
    assert_eq!(texts, ["m", "i"]);

    let set: Vec<_> = flags.iter().collect();
    assert_eq!(
        set,
        [
            (Flag::Global, false),
            (Flag::IgnoreCase, true),
            (Flag::Multiline, true),
            (Flag::DotAll, false),
            (Flag::Unicode, false),
            (Flag::Sticky, false),
        ]
    );
    assert!(flags.ignore_case() && flags.multiline());
    assert!(!flags.global() && !flags.dot_all() && !flags.unicode() && !flags.sticky());
}

#[test]
fn empty_flags_have_six_false_slots() {
    let flags = Flags::empty();
    assert_eq!(flags.iter().count(), 6);
    assert!(flags.iter().all(|(_, on)| !on));
    assert!(flags.tokens().is_empty());
    assert_eq!(flags, Flags::new(Vec::new()));
}

#[test]
#[should_panic(expected = "duplicate flag `g`")]
fn duplicate_letter_is_a_broken_invariant() {
    Flags::new(vec![Token::keyword("g"), Token::keyword("g")]);
}

#[test]
#[should_panic(expected = "is not a flag letter")]
fn unknown_letter_is_a_broken_invariant() {
    Flags::new(vec![Token::keyword("x")]);
}
