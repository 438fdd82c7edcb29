//! Results views: the collaborator that displays the items of a page.

use crate::dom::{Container, Element, MemoryContainer};
use crate::pager::PageWindow;
use crate::Result;
use std::fmt::Display;

/// Renders the slice of results belonging to one page.
///
/// The controller calls this before refreshing the controls, so a view never
/// needs to re-enter the pagination code itself.
pub trait ResultsView<T> {
    fn render_page(&mut self, items: &[T], window: &PageWindow) -> Result<()>;
}

/// View that keeps the rendered page as lines of text.
#[derive(Debug, Clone, Default)]
pub struct TextListView {
    lines: Vec<String>,
    renders: usize,
}

impl TextListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header followed by one line per item
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// The rendered lines as a `<ul>` of `<li>` items with the given id
    pub fn to_list(&self, id: &str) -> MemoryContainer {
        let mut list = MemoryContainer::with_tag(id, "ul");
        for line in &self.lines {
            list.append_child(Element::new("li", line));
        }
        list
    }

    /// Number of times a page has been rendered
    pub fn render_count(&self) -> usize {
        self.renders
    }
}

impl<T: Display> ResultsView<T> for TextListView {
    fn render_page(&mut self, items: &[T], window: &PageWindow) -> Result<()> {
        self.lines.clear();
        if window.is_empty() {
            self.lines.push("No results".to_string());
        } else {
            self.lines.push(format!(
                "Showing {}-{} of {}",
                window.start + 1,
                window.end,
                window.total_items
            ));
            self.lines.extend(items.iter().map(|item| item.to_string()));
        }
        self.renders += 1;
        Ok(())
    }
}

/// View that discards everything, for callers that only need the controls.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopView;

impl<T> ResultsView<T> for NoopView {
    fn render_page(&mut self, _items: &[T], _window: &PageWindow) -> Result<()> {
        Ok(())
    }
}
