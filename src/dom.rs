//! A small element tree used to build page fragments.
//!
//! Mirrors the handful of DOM operations the page needs: create an element,
//! set its id/class, append children, and assign inner HTML. Rendering
//! escapes text and attribute values but emits assigned markup untouched.

use std::fmt;

// ============================================================================
// Text Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Nodes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// Raw markup, rendered verbatim.
    Markup(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            class_name: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Sets an attribute, replacing an existing one of the same name.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn append_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Replaces all children with raw markup.
    pub fn set_inner_html(&mut self, markup: impl Into<String>) {
        self.children = vec![Node::Markup(markup.into())];
    }

    /// Replaces all children with escaped text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Direct children carrying `class_name`.
    pub fn children_with_class<'a>(
        &'a self,
        class_name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.child_elements()
            .filter(move |e| e.class_name.as_deref() == Some(class_name))
    }

    /// Serialized children, i.e. what `innerHTML` would read back.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            render_node(child, &mut out);
        }
        out
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        render_element(self, &mut out);
        out
    }
}

fn render_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(e) => render_element(e, out),
        Node::Text(t) => out.push_str(&html_escape(t)),
        Node::Markup(m) => out.push_str(m),
    }
}

fn render_element(e: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&e.tag);
    if let Some(id) = &e.id {
        out.push_str(&format!(" id=\"{}\"", html_escape(id)));
    }
    if let Some(class_name) = &e.class_name {
        out.push_str(&format!(" class=\"{}\"", html_escape(class_name)));
    }
    for (name, value) in &e.attributes {
        out.push_str(&format!(" {}=\"{}\"", name, html_escape(value)));
    }
    out.push('>');

    if VOID_TAGS.contains(&e.tag.as_str()) {
        return;
    }

    for child in &e.children {
        render_node(child, out);
    }
    out.push_str(&format!("</{}>", e.tag));
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
