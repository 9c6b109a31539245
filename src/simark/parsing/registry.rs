//! Element registry
//!
//! An ordered list of element parsers. The part grammar tries them in registration order and
//! falls back to the unknown group when none accepts.

use crate::simark::parsing::element::ElementParser;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct Registry {
    parsers: Vec<Rc<dyn ElementParser>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, parser: impl ElementParser + 'static) {
        self.parsers.push(Rc::new(parser));
    }

    /// Builder form of `register`.
    pub fn with(mut self, parser: impl ElementParser + 'static) -> Self {
        self.register(parser);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<dyn ElementParser>> {
        self.parsers.iter()
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}
