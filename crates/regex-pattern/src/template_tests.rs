use crate::{Character, Flags, Template, Token};

#[test]
fn plain_text_has_no_boundaries() {
    let template = Template::from("/abc/");

    assert_eq!(template.source(), "/abc/");
    assert!(template.boundaries().is_empty());
    assert!(template.substitutions().is_empty());
}

#[test]
fn builder_records_boundaries() {
    let template = Template::new("/a")
        .embed(Character::literal(Token::character("b")))
        .text("c/")
        .embed(Flags::empty());

    assert_eq!(template.source(), "/ac/");
    assert_eq!(template.boundaries(), [2, 4]);
    assert_eq!(template.substitutions().len(), 2);
    assert!(template.substitution(1).is_some());
    assert!(template.substitution(2).is_none());
}

#[test]
fn from_parts_joins_segments() {
    let template = Template::from_parts(&["/", "", "/"], vec![Flags::empty().into()]);

    assert_eq!(template.source(), "//");
    assert_eq!(template.boundaries(), [1, 1]);
    assert_eq!(template.substitutions().len(), 1);
}

#[test]
fn single_segment_from_parts() {
    let template = Template::from_parts(&[String::from("/x/")], Vec::new());

    assert_eq!(template, Template::new("/x/"));
}
