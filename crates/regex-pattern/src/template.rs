//! Pattern text with embedded subtrees.
//!
//! A template is what a tagged template literal hands to the grammar: text
//! segments interleaved with already-built nodes. The parser sees a zero-width
//! interpolation marker at each boundary and splices the matching node in.

use regex_pattern_core::Node;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    /// Text segments joined without separators.
    source: String,
    /// Byte offsets in `source` where an interpolation sits.
    boundaries: Vec<usize>,
    substitutions: Vec<Node>,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            source: text.into(),
            boundaries: Vec::new(),
            substitutions: Vec::new(),
        }
    }

    /// Builds a template from raw segments and the values between them.
    ///
    /// `segments.len()` is normally `substitutions.len() + 1`. Fewer
    /// substitutions leave interpolations without a subtree, which the parser
    /// reports when it reaches them; extra ones are reported at end of input.
    pub fn from_parts<S: AsRef<str>>(segments: &[S], substitutions: Vec<Node>) -> Self {
        let mut template = Self::default();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                template.boundaries.push(template.source.len());
            }
            template.source.push_str(segment.as_ref());
        }
        template.substitutions = substitutions;
        template
    }

    /// Appends an interpolation carrying `node`.
    pub fn embed(mut self, node: impl Into<Node>) -> Self {
        self.boundaries.push(self.source.len());
        self.substitutions.push(node.into());
        self
    }

    /// Appends literal text.
    pub fn text(mut self, text: &str) -> Self {
        self.source.push_str(text);
        self
    }

    /// Joined segment text. Error ranges index into this string.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    pub fn substitution(&self, index: usize) -> Option<&Node> {
        self.substitutions.get(index)
    }

    pub fn substitutions(&self) -> &[Node] {
        &self.substitutions
    }
}

impl From<&str> for Template {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Template {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
