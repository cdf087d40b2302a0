//! `PreviewTarget` over a live DOM element.

use log::warn;
use motionforge_core::PreviewTarget;
use web_sys::HtmlElement;

/// Binds the preview to an existing element; no wrapper is created.
#[derive(Debug, Clone)]
pub struct DomTarget {
    element: HtmlElement,
}

impl DomTarget {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl PreviewTarget for DomTarget {
    fn add_class(&mut self, token: &str) {
        if let Err(err) = self.element.class_list().add_1(token) {
            warn!("classList.add('{token}') failed: {err:?}");
        }
    }

    fn remove_class(&mut self, token: &str) {
        if let Err(err) = self.element.class_list().remove_1(token) {
            warn!("classList.remove('{token}') failed: {err:?}");
        }
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        if let Err(err) = self.element.style().set_property(name, value) {
            warn!("style.setProperty('{name}') failed: {err:?}");
        }
    }

    fn remove_style_property(&mut self, name: &str) {
        if let Err(err) = self.element.style().remove_property(name) {
            warn!("style.removeProperty('{name}') failed: {err:?}");
        }
    }

    fn reflow(&mut self) {
        // Reading layout forces the browser to drop the finished animation.
        let _ = self.element.offset_width();
    }
}
