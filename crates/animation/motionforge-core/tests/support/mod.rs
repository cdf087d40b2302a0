#![allow(dead_code)]
//! Recording stand-in for a DOM element.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use motionforge_core::PreviewTarget;

#[derive(Debug, Default)]
pub struct ElementState {
    pub classes: Vec<String>,
    pub style: BTreeMap<String, String>,
    /// Times a class was newly applied; each one starts a CSS animation.
    pub animation_starts: usize,
    pub style_writes: usize,
    pub reflows: usize,
}

/// Cloning shares the underlying element, like cloning a DOM handle.
#[derive(Clone, Debug, Default)]
pub struct RecordingElement(Rc<RefCell<ElementState>>);

impl RecordingElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn animation_classes(&self) -> Vec<String> {
        self.classes()
            .into_iter()
            .filter(|c| c.starts_with("mf-"))
            .collect()
    }

    pub fn style(&self, name: &str) -> Option<String> {
        self.0.borrow().style.get(name).cloned()
    }

    pub fn style_names(&self) -> Vec<String> {
        self.0.borrow().style.keys().cloned().collect()
    }

    pub fn animation_starts(&self) -> usize {
        self.0.borrow().animation_starts
    }

    pub fn style_writes(&self) -> usize {
        self.0.borrow().style_writes
    }

    pub fn reflows(&self) -> usize {
        self.0.borrow().reflows
    }

    pub fn is_clean(&self) -> bool {
        let state = self.0.borrow();
        state.classes.iter().all(|c| !c.starts_with("mf-")) && state.style.is_empty()
    }

    /// Host-owned class the binder must never touch.
    pub fn with_host_class(self, class: &str) -> Self {
        self.0.borrow_mut().classes.push(class.to_string());
        self
    }
}

impl PreviewTarget for RecordingElement {
    fn add_class(&mut self, token: &str) {
        let mut state = self.0.borrow_mut();
        if !state.classes.iter().any(|c| c == token) {
            state.classes.push(token.to_string());
            state.animation_starts += 1;
        }
    }

    fn remove_class(&mut self, token: &str) {
        self.0.borrow_mut().classes.retain(|c| c != token);
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        let mut state = self.0.borrow_mut();
        state.style.insert(name.to_string(), value.to_string());
        state.style_writes += 1;
    }

    fn remove_style_property(&mut self, name: &str) {
        self.0.borrow_mut().style.remove(name);
    }

    fn reflow(&mut self) {
        self.0.borrow_mut().reflows += 1;
    }
}
