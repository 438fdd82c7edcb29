//! Minimal DOM model for rendered controls.
//!
//! Controls are rendered into a [`Container`], an injected handle to the
//! element that owns them. Click handlers are represented as data (an
//! [`Activation`]) so that whoever owns page state decides what a click does.

use crate::controls::Activation;
use std::fmt::Write as _;

/// A rendered element: a `<button>` for controls, or whatever was imported
/// from a host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub text: String,
    pub class_name: String,
    pub disabled: bool,
    pub on_click: Option<Activation>,
}

impl Element {
    pub fn new(tag: &str, text: &str) -> Self {
        Self {
            tag: tag.to_string(),
            text: text.to_string(),
            class_name: String::new(),
            disabled: false,
            on_click: None,
        }
    }

    pub fn button(text: &str) -> Self {
        Self::new("button", text)
    }

    pub fn has_class(&self, class: &str) -> bool {
        !class.is_empty() && self.class_name.split_whitespace().any(|c| c == class)
    }

    pub fn to_html(&self) -> String {
        let mut out = format!("<{}", self.tag);
        if !self.class_name.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.class_name));
        }
        if let Some(act) = &self.on_click {
            let _ = write!(out, " data-page=\"{}\"", act.page);
        }
        if self.disabled {
            out.push_str(" disabled");
        }
        let _ = write!(out, ">{}</{}>", escape(&self.text), self.tag);
        out
    }
}

/// The element that exclusively owns the rendered controls.
pub trait Container {
    /// Id of the element in its host page
    fn id(&self) -> &str;

    /// Remove every child
    fn clear(&mut self);

    fn append_child(&mut self, child: Element);

    fn children(&self) -> &[Element];
}

/// Vec-backed container used headlessly and in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryContainer {
    id: String,
    tag: String,
    children: Vec<Element>,
}

impl MemoryContainer {
    pub fn new(id: &str) -> Self {
        Self::with_tag(id, "div")
    }

    pub fn with_tag(id: &str, tag: &str) -> Self {
        Self {
            id: id.to_string(),
            tag: tag.to_string(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Serialize the container and its children as HTML
    pub fn to_html(&self) -> String {
        format!(
            "<{tag} id=\"{id}\">{inner}</{tag}>",
            tag = self.tag,
            id = escape(&self.id),
            inner = self.inner_html()
        )
    }

    /// Serialized children only
    pub fn inner_html(&self) -> String {
        self.children.iter().map(Element::to_html).collect()
    }

    /// One-line text form: disabled controls in parentheses, active ones in
    /// brackets, e.g. `(Previous) [1] 2 3 Next`.
    pub fn to_text(&self) -> String {
        self.to_text_marking("active")
    }

    /// Same as [`to_text`](Self::to_text) with a custom active class.
    pub fn to_text_marking(&self, active_class: &str) -> String {
        self.children
            .iter()
            .map(|c| {
                if c.disabled {
                    format!("({})", c.text)
                } else if c.on_click.is_some() && c.has_class(active_class) {
                    format!("[{}]", c.text)
                } else {
                    c.text.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Container for MemoryContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn clear(&mut self) {
        self.children.clear();
    }

    fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    fn children(&self) -> &[Element] {
        &self.children
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
