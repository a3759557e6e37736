//! The fixed flag table.
//!
//! Six flags, always reported in this order regardless of how (or whether)
//! their letters appear in source.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Flag {
    Global,
    IgnoreCase,
    Multiline,
    DotAll,
    Unicode,
    Sticky,
}

/// Letter and attribute name per flag, indexed by canonical position.
static FLAG_TABLE: [(Flag, char, &str); 6] = [
    (Flag::Global, 'g', "global"),
    (Flag::IgnoreCase, 'i', "ignoreCase"),
    (Flag::Multiline, 'm', "multiline"),
    (Flag::DotAll, 's', "dotAll"),
    (Flag::Unicode, 'u', "unicode"),
    (Flag::Sticky, 'y', "sticky"),
];

impl Flag {
    /// Canonical order.
    pub const ALL: [Flag; 6] = [
        Flag::Global,
        Flag::IgnoreCase,
        Flag::Multiline,
        Flag::DotAll,
        Flag::Unicode,
        Flag::Sticky,
    ];

    pub fn from_letter(letter: char) -> Option<Flag> {
        FLAG_TABLE
            .iter()
            .find(|(_, l, _)| *l == letter)
            .map(|(flag, _, _)| *flag)
    }

    pub fn letter(self) -> char {
        FLAG_TABLE[self.index()].1
    }

    /// Attribute name, e.g. `ignoreCase`.
    pub fn name(self) -> &'static str {
        FLAG_TABLE[self.index()].2
    }

    /// Position in canonical order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
