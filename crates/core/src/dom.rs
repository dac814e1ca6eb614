//! A minimal DOM tree and HTML serializer.
//!
//! Only what the form pages need: elements with ordered attributes, text
//! nodes, lookup by `id`, and serialization with escaping.

use std::fmt::Write as _;

/// Elements that never carry children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An attribute; `value == None` is a boolean attribute such as `required`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style [`Element::set_attr`].
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder-style [`Element::set_flag`].
    pub fn with_flag(mut self, name: &str, on: bool) -> Self {
        self.set_flag(name, on);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.append_text(text);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.append_child(child);
        self
    }

    /// Set an attribute, replacing an existing one of the same name in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = Some(value.into());
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
    }

    /// Add or remove a boolean attribute.
    pub fn set_flag(&mut self, name: &str, on: bool) {
        self.attributes.retain(|a| a.name != name);
        if on {
            self.attributes.push(Attribute {
                name: name.to_string(),
                value: None,
            });
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .and_then(|a| a.value.as_deref())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|a| a.name == name)
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Direct element children, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search (self included) for the element with `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(child) => child.find_by_id_mut(id),
            Node::Text(_) => None,
        })
    }

    /// All descendant elements (self excluded) with the given tag, in document order.
    pub fn descendants_by_tag<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        collect_by_tag(self, tag, &mut out);
        out
    }

    pub fn is_void(&self) -> bool {
        VOID_ELEMENTS.contains(&self.tag.as_str())
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

/// A complete HTML document rooted at `<html>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.root.find_by_id(id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_by_id_mut(id)
    }

    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}", self.root.to_html())
    }
}

fn collect_text(el: &Element, out: &mut String) {
    for node in &el.children {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(child) => collect_text(child, out),
        }
    }
}

fn collect_by_tag<'a>(el: &'a Element, tag: &str, out: &mut Vec<&'a Element>) {
    for child in el.child_elements() {
        if child.tag == tag {
            out.push(child);
        }
        collect_by_tag(child, tag, out);
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for attr in &el.attributes {
        out.push(' ');
        out.push_str(&attr.name);
        if let Some(value) = &attr.value {
            // Writing into a String cannot fail.
            let _ = write!(
                out,
                "=\"{}\"",
                html_escape::encode_double_quoted_attribute(value)
            );
        }
    }
    out.push('>');

    if el.is_void() {
        return;
    }

    for node in &el.children {
        match node {
            Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
            Node::Element(child) => write_element(child, out),
        }
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}
