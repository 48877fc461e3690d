//! Event bindings with bind-or-replace semantics.
//!
//! Each (element, event kind) pair holds at most one handler. Binding the
//! same pair again replaces the previous handler, so repeated setup (for
//! example re-binding gallery photos every time the gallery opens) can never
//! stack duplicate subscriptions.

use std::collections::HashMap;

use folio_types::input::{Element, EventKind};

/// Handler table keyed by element and event kind.
#[derive(Debug)]
pub struct BindingTable<H> {
    handlers: HashMap<(Element, EventKind), H>,
}

impl<H> Default for BindingTable<H> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<H: Copy> BindingTable<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler`, returning the handler it replaced.
    pub fn bind(&mut self, element: Element, kind: EventKind, handler: H) -> Option<H> {
        self.handlers.insert((element, kind), handler)
    }

    pub fn handler(&self, element: Element, kind: EventKind) -> Option<H> {
        self.handlers.get(&(element, kind)).copied()
    }

    /// Handlers along the bubble path from `target` up through its parents,
    /// innermost first.
    pub fn route(&self, target: Element, kind: EventKind) -> Vec<(Element, H)> {
        let mut out = Vec::new();
        let mut cur = Some(target);
        while let Some(el) = cur {
            if let Some(h) = self.handler(el, kind) {
                out.push((el, h));
            }
            cur = el.parent();
        }
        out
    }

    /// Number of bindings for `kind` across all elements.
    pub fn count(&self, kind: EventKind) -> usize {
        self.handlers.keys().filter(|(_, k)| *k == kind).count()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
