//! The pagination control row: Previous, one button per page, Next.

use crate::dom::{Container, Element};
use crate::pager::Pager;
use crate::{PaginationConfig, Result};

/// What a control does when clicked: navigate to `page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub page: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Previous,
    Page(usize),
    Next,
}

/// A single navigation control before it is turned into an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    pub label: String,
    pub disabled: bool,
    pub active: bool,
    pub activation: Activation,
}

impl Control {
    pub fn to_element(&self, active_class: &str) -> Element {
        let mut el = Element::button(&self.label);
        el.disabled = self.disabled;
        if self.active {
            el.class_name = active_class.to_string();
        }
        el.on_click = Some(self.activation);
        el
    }
}

/// Build the control row for `current_page` of `total_pages`.
///
/// `current_page` is taken as given; callers resolve it first. With
/// `total_pages == 0` no page controls are produced and both navigation
/// controls are disabled.
pub fn build_controls(
    current_page: usize,
    total_pages: usize,
    config: &PaginationConfig,
) -> Vec<Control> {
    let mut controls = Vec::with_capacity(total_pages + 2);

    controls.push(Control {
        kind: ControlKind::Previous,
        label: config.previous_label.clone(),
        disabled: current_page <= 1,
        active: false,
        activation: Activation {
            page: current_page.saturating_sub(1),
        },
    });

    for i in 1..=total_pages {
        controls.push(Control {
            kind: ControlKind::Page(i),
            label: i.to_string(),
            disabled: false,
            active: i == current_page,
            activation: Activation { page: i },
        });
    }

    controls.push(Control {
        kind: ControlKind::Next,
        label: config.next_label.clone(),
        disabled: current_page >= total_pages,
        active: false,
        activation: Activation {
            page: current_page + 1,
        },
    });

    controls
}

/// Replace the children of `container` with the control row for
/// `current_page` of `results`.
///
/// Returns the page that was rendered, which differs from `current_page`
/// only when the config clamps out-of-range pages.
pub fn render_pagination<T, C>(
    container: &mut C,
    results: &[T],
    current_page: usize,
    page_size: usize,
    config: &PaginationConfig,
) -> Result<usize>
where
    C: Container + ?Sized,
{
    let pager = Pager::new(results.len(), page_size)?;
    let page = pager.resolve(current_page, config.page_bounds)?;
    let total_pages = pager.total_pages();

    container.clear();
    for control in build_controls(page, total_pages, config) {
        container.append_child(control.to_element(&config.active_class));
    }

    log::debug!(
        "rendered {} controls into #{} (page {} of {})",
        total_pages + 2,
        container.id(),
        page,
        total_pages
    );
    Ok(page)
}
