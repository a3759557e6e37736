//! Splicing embedded subtrees at interpolation points.
//!
//! Each position accepts one node family; anything else is a composition
//! error reported at the interpolation.

use regex_pattern_core::{ClassElement, Element, Flags};

use crate::Result;
use crate::diagnostics::ErrorKind;
use crate::parser::Parser;

impl Parser<'_> {
    pub(crate) fn splice_element(&mut self) -> Result<Element> {
        let span = self.current_span();
        let node = self.take_substitution()?;
        Element::try_from(node).map_err(|node| {
            self.error_at(
                ErrorKind::Composition,
                span,
                format!("expected an element, found `{}`", node.node_type()),
            )
        })
    }

    pub(crate) fn splice_class_element(&mut self) -> Result<ClassElement> {
        let span = self.current_span();
        let node = self.take_substitution()?;
        ClassElement::try_from(node).map_err(|node| {
            self.error_at(
                ErrorKind::Composition,
                span,
                format!("expected a class element, found `{}`", node.node_type()),
            )
        })
    }

    pub(crate) fn splice_flags(&mut self) -> Result<Flags> {
        let span = self.current_span();
        let node = self.take_substitution()?;
        Flags::try_from(node).map_err(|node| {
            self.error_at(
                ErrorKind::Composition,
                span,
                format!("expected flags, found `{}`", node.node_type()),
            )
        })
    }
}
