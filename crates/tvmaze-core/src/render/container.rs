//! Containers that rendered elements are attached to
//!
//! Renderers never look up page elements themselves; the caller passes in
//! the container to draw into.

use askama::Template;

use super::element::Element;
use crate::error::Result;

/// A named region of the page that owns the elements rendered into it
pub trait Container {
    /// Remove every child element
    fn clear(&mut self);

    /// Attach an element after the existing children
    fn append(&mut self, element: Element);

    /// Show or hide the container
    fn set_visible(&mut self, visible: bool);

    /// Whether the container is currently shown
    fn is_visible(&self) -> bool;
}

#[derive(Template)]
#[template(path = "partials/container.html")]
struct ContainerTemplate<'a> {
    id: &'a str,
    visible: bool,
    inner: &'a str,
}

/// In-memory container that serializes to HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlContainer {
    id: String,
    children: Vec<Element>,
    visible: bool,
}

impl HtmlContainer {
    /// Create an empty, visible container
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
            visible: true,
        }
    }

    /// Create an empty, hidden container
    pub fn hidden(id: impl Into<String>) -> Self {
        Self {
            visible: false,
            ..Self::new(id)
        }
    }

    /// Id of the container element
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Attached elements in display order
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Whether no element is attached
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// HTML of the children only
    pub fn inner_html(&self) -> String {
        self.children.iter().map(Element::html).collect()
    }

    /// HTML of the container element itself, hidden containers carry
    /// `style="display: none"`
    ///
    /// # Errors
    /// Returns `TvMazeError::RenderError` if the template fails to render.
    pub fn outer_html(&self) -> Result<String> {
        let inner = self.inner_html();
        let template = ContainerTemplate {
            id: &self.id,
            visible: self.visible,
            inner: &inner,
        };
        Ok(template.render()?)
    }
}

impl Container for HtmlContainer {
    fn clear(&mut self) {
        self.children.clear();
    }

    fn append(&mut self, element: Element) {
        self.children.push(element);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
