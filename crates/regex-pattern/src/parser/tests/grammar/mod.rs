mod alternatives_tests;
mod classes_tests;
mod escapes_tests;
mod flags_tests;
mod quantifiers_tests;
