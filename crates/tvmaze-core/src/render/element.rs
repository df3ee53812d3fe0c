//! Rendered elements
//!
//! Renderers fill an askama template and wrap the output in an [`Element`]
//! before handing it to a [`Container`](super::Container). Attributes of the
//! element's root tag that callers need later, such as the show id of a
//! card, are recorded next to the markup so they can be read back without
//! parsing it.

use askama::Template;

use crate::error::Result;

/// A rendered element and the root attributes recorded for lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    html: String,
    attributes: Vec<(&'static str, String)>,
}

impl Element {
    /// Render a template into an element.
    ///
    /// # Errors
    /// Returns `TvMazeError::RenderError` if the template fails to render.
    pub fn render<T: Template>(template: &T) -> Result<Self> {
        Ok(Self {
            html: template.render()?,
            attributes: Vec::new(),
        })
    }

    /// Record an attribute of the root tag, replacing an earlier value of
    /// the same name
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Value of a recorded attribute, if set
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Rendered markup
    pub fn html(&self) -> &str {
        &self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Template)]
    #[template(source = "<p title=\"{{ title }}\">{{ text }}</p>", ext = "html")]
    struct Paragraph<'a> {
        title: &'a str,
        text: &'a str,
    }

    #[test]
    fn test_render_escapes_values() {
        let element = Element::render(&Paragraph {
            title: "\"quoted\"",
            text: "Tom & <i>Jerry</i>",
        })
        .unwrap();

        assert!(!element.html().contains("<i>"));
        assert!(element.html().contains("&amp;"));
        assert!(!element.html().contains("\"quoted\""));
    }

    #[test]
    fn test_attr_lookup() {
        let element = Element::render(&Paragraph { title: "t", text: "x" })
            .unwrap()
            .attr("data-show-id", "1")
            .attr("data-show-id", "2");

        assert_eq!(element.attribute("data-show-id"), Some("2"));
        assert_eq!(element.attribute("title"), None);
    }
}
