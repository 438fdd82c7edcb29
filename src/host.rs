//! HTML host pages.
//!
//! A host page is the surrounding document that must already contain the
//! container element. Looking the container up is the one place where a
//! missing element is detected; everything downstream works on the resolved
//! [`MemoryContainer`] handle.

use crate::controls::Activation;
use crate::dom::{Container, Element, MemoryContainer};
use crate::{Error, Result};
use scraper::node::Comment;
use scraper::{ElementRef, Html, Node, Selector};

/// A parsed HTML document hosting a pagination container.
pub struct HostPage {
    document: Html,
}

impl HostPage {
    pub fn parse(markup: &str) -> Self {
        Self {
            document: Html::parse_document(markup),
        }
    }

    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let markup = std::fs::read_to_string(path)?;
        Ok(Self::parse(&markup))
    }

    fn find(&self, id: &str) -> Result<ElementRef<'_>> {
        let all = Selector::parse("*").map_err(|e| Error::RenderError(format!("{:?}", e)))?;
        self.document
            .select(&all)
            .find(|el| el.value().id() == Some(id))
            .ok_or_else(|| Error::ContainerNotFound(id.to_string()))
    }

    /// Resolve the container with the given id. Its current element children
    /// are imported; a `data-page` attribute is read back as the activation.
    pub fn container(&self, id: &str) -> Result<MemoryContainer> {
        let el = self.find(id)?;
        let mut container = MemoryContainer::with_tag(id, el.value().name());
        for child in el.children().filter_map(ElementRef::wrap) {
            let value = child.value();
            let text: String = child.text().collect();
            let mut imported = Element::new(value.name(), text.trim());
            imported.class_name = value.attr("class").unwrap_or_default().to_string();
            imported.disabled = value.attr("disabled").is_some();
            imported.on_click = value
                .attr("data-page")
                .and_then(|p| p.parse().ok())
                .map(|page| Activation { page });
            container.append_child(imported);
        }
        log::debug!(
            "resolved container #{} <{}> with {} existing children",
            id,
            container.tag(),
            container.children().len()
        );
        Ok(container)
    }

    /// Serialize the page with the children of each container element
    /// replaced by the children of the matching (same id) container.
    ///
    /// The swap happens on the parsed tree: each target element is emptied
    /// and given a comment placeholder, so identical markup elsewhere in the
    /// page (script bodies, attribute values) is left untouched.
    pub fn render_with(&self, containers: &[&MemoryContainer]) -> Result<String> {
        let original = self.document.root_element().html();
        let mut doc = self.document.clone();
        let mut markers = Vec::with_capacity(containers.len());

        for (i, container) in containers.iter().enumerate() {
            let el = self.find(container.id())?;
            let node_id = (*el).id();
            let mut marker = format!("pagectl:{}:{}", i, container.id());
            while original.contains(&marker) {
                marker.push('~');
            }

            let mut node = doc
                .tree
                .get_mut(node_id)
                .ok_or_else(|| Error::ContainerNotFound(container.id().to_string()))?;
            while let Some(mut child) = node.first_child() {
                child.detach();
            }
            node.append(Node::Comment(Comment {
                comment: marker.as_str().into(),
            }));
            markers.push((format!("<!--{}-->", marker), container.inner_html()));
        }

        let mut html = doc.root_element().html();
        for (placeholder, inner) in markers {
            html = html.replacen(&placeholder, &inner, 1);
        }
        Ok(format!("{}{}", self.doctype(), html))
    }

    fn doctype(&self) -> String {
        self.document
            .tree
            .root()
            .children()
            .find_map(|n| match n.value() {
                Node::Doctype(d) => Some(format!("<!DOCTYPE {}>", d.name())),
                _ => None,
            })
            .unwrap_or_default()
    }
}
