//! The owner of pagination state.
//!
//! A [`PaginationController`] holds the results, the current page, the
//! controls container and the results view. Every navigation goes through
//! [`set_page`](PaginationController::set_page), which renders the view and
//! then the controls from the new state.

use crate::controls::render_pagination;
use crate::dom::Container;
use crate::pager::{PageWindow, Pager};
use crate::view::ResultsView;
use crate::{Error, PaginationConfig, Result};
use std::sync::Arc;

type OnPageChangeHandler = Arc<dyn Fn(&PageWindow) + Send + Sync>;

pub struct PaginationController<T, C, V>
where
    C: Container,
    V: ResultsView<T>,
{
    results: Vec<T>,
    config: PaginationConfig,
    current_page: usize,
    container: C,
    view: V,
    on_page_change: Vec<OnPageChangeHandler>,
}

impl<T, C, V> PaginationController<T, C, V>
where
    C: Container,
    V: ResultsView<T>,
{
    /// Create a controller. Nothing is rendered until [`render`](Self::render)
    /// or [`set_page`](Self::set_page) is called.
    pub fn new(results: Vec<T>, config: PaginationConfig, container: C, view: V) -> Result<Self> {
        config.validate()?;
        if container.id() != config.container_id {
            log::warn!(
                "container #{} does not match configured id #{}",
                container.id(),
                config.container_id
            );
        }
        Ok(Self {
            results,
            config,
            current_page: 1,
            container,
            view,
            on_page_change: Vec::new(),
        })
    }

    fn pager(&self) -> Result<Pager> {
        Pager::new(self.results.len(), self.config.page_size)
    }

    /// Initial render at page 1
    pub fn render(&mut self) -> Result<()> {
        self.set_page(1)
    }

    /// Navigate to `page`: update state, render the results view, then
    /// refresh the controls.
    pub fn set_page(&mut self, page: usize) -> Result<()> {
        let pager = self.pager()?;
        let page = pager.resolve(page, self.config.page_bounds)?;
        let window = pager.window(page)?;

        self.view.render_page(&self.results[window.range()], &window)?;
        render_pagination(
            &mut self.container,
            &self.results,
            page,
            self.config.page_size,
            &self.config,
        )?;

        let previous = std::mem::replace(&mut self.current_page, page);
        log::debug!("page {} -> {} of {}", previous, page, window.total_pages);

        for cb in &self.on_page_change {
            cb(&window);
        }
        Ok(())
    }

    pub fn next(&mut self) -> Result<()> {
        self.set_page(self.current_page + 1)
    }

    pub fn previous(&mut self) -> Result<()> {
        self.set_page(self.current_page.saturating_sub(1))
    }

    /// Click the control at `index` in the container.
    ///
    /// Returns `Ok(false)` when the control is disabled or has no activation,
    /// matching a browser ignoring clicks on a disabled button.
    pub fn activate(&mut self, index: usize) -> Result<bool> {
        let el = self
            .container
            .children()
            .get(index)
            .ok_or_else(|| Error::ControlNotFound(format!("index {}", index)))?;
        if el.disabled {
            log::warn!("ignoring click on disabled control {:?}", el.text);
            return Ok(false);
        }
        let target = el.on_click;
        match target {
            Some(act) => {
                self.set_page(act.page)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Click the first control whose label is `label`.
    pub fn activate_label(&mut self, label: &str) -> Result<bool> {
        let index = self
            .container
            .children()
            .iter()
            .position(|el| el.text == label)
            .ok_or_else(|| Error::ControlNotFound(format!("label {:?}", label)))?;
        self.activate(index)
    }

    /// Swap in a new result set and render its first page.
    pub fn replace_results(&mut self, results: Vec<T>) -> Result<()> {
        self.results = results;
        self.set_page(1)
    }

    /// Register a callback invoked after every page change
    pub fn on_page_change<F>(&mut self, cb: F)
    where
        F: Fn(&PageWindow) + Send + Sync + 'static,
    {
        self.on_page_change.push(Arc::new(cb));
    }

    pub fn clear_on_page_change(&mut self) {
        self.on_page_change.clear();
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.results.len().div_ceil(self.config.page_size)
    }

    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    pub fn results(&self) -> &[T] {
        &self.results
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
