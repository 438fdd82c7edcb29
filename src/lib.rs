//! pagectl
//!
//! Pagination controls for static, in-memory result sets. A row of
//! "Previous", page-number and "Next" buttons is rendered into a container
//! element, and each button carries the page it navigates to.
//!
//! # Features
//!
//! - **Injected container**: controls render into anything implementing
//!   [`Container`], such as the in-memory [`MemoryContainer`]
//! - **Single owner of page state**: [`PaginationController`] holds the
//!   current page and re-renders both the results view and the controls
//! - **Host pages** (`host` feature, default): resolve the container by id
//!   from an HTML document
//!
//! # Example
//!
//! ```
//! use pagectl::{MemoryContainer, PaginationConfig, PaginationController, TextListView};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let results: Vec<u32> = (1..=25).collect();
//! let config = PaginationConfig::default();
//! let container = MemoryContainer::new(&config.container_id);
//!
//! let mut controller =
//!     PaginationController::new(results, config, container, TextListView::new())?;
//! controller.render()?;
//! controller.activate_label("2")?;
//!
//! assert_eq!(controller.current_page(), 2);
//! assert_eq!(controller.container().to_text(), "Previous 1 [2] 3 Next");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod controller;
pub mod controls;
pub mod dom;
pub mod pager;
pub mod results;
pub mod view;

// HTML host page loading
#[cfg(feature = "host")]
pub mod host;

pub use controller::PaginationController;
pub use controls::{build_controls, render_pagination, Activation, Control, ControlKind};
pub use dom::{Container, Element, MemoryContainer};
pub use pager::{PageWindow, Pager};
pub use results::SearchResult;
pub use view::{NoopView, ResultsView, TextListView};

#[cfg(feature = "host")]
pub use host::HostPage;

/// How a requested page outside `1..=total_pages` is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageBounds {
    /// Fail with [`Error::PageOutOfRange`]
    #[default]
    Reject,
    /// Clamp the page into the valid range
    Clamp,
}

/// Configuration for pagination rendering
///
/// The defaults reproduce the classic control row: a container with id
/// `paginationControls`, ten results per page, "Previous"/"Next" labels and
/// an `active` class on the current page button.
///
/// # Examples
///
/// ```
/// let cfg = pagectl::PaginationConfig::default();
/// assert_eq!(cfg.page_size, 10);
/// assert_eq!(cfg.container_id, "paginationControls");
/// ```
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// Number of results per page
    pub page_size: usize,
    /// Id of the container element that receives the controls
    pub container_id: String,
    /// Label of the backward navigation control
    pub previous_label: String,
    /// Label of the forward navigation control
    pub next_label: String,
    /// Class applied to the current page control
    pub active_class: String,
    /// Handling of out-of-range page requests
    pub page_bounds: PageBounds,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            container_id: "paginationControls".to_string(),
            previous_label: "Previous".to_string(),
            next_label: "Next".to_string(),
            active_class: "active".to_string(),
            page_bounds: PageBounds::Reject,
        }
    }
}

impl PaginationConfig {
    /// Check that the configuration can produce a usable control row
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize(self.page_size));
        }
        if self.container_id.trim().is_empty() {
            return Err(Error::ConfigError("container id must not be empty".into()));
        }
        if self.active_class.is_empty() || self.active_class.contains(char::is_whitespace) {
            return Err(Error::ConfigError(format!(
                "active class must be a single non-empty class name (got {:?})",
                self.active_class
            )));
        }
        if self.previous_label.is_empty() || self.next_label.is_empty() {
            return Err(Error::ConfigError("navigation labels must not be empty".into()));
        }
        if self.previous_label == self.next_label {
            return Err(Error::ConfigError(format!(
                "previous and next labels must differ (both are {:?})",
                self.next_label
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PaginationConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.previous_label, "Previous");
        assert_eq!(config.next_label, "Next");
        assert_eq!(config.active_class, "active");
        assert_eq!(config.page_bounds, PageBounds::Reject);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let config = PaginationConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidPageSize(0))));
    }

    #[test]
    fn test_validate_rejects_bad_labels() {
        let config = PaginationConfig {
            next_label: "Previous".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        let config = PaginationConfig {
            container_id: "  ".into(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_validate_rejects_unusable_active_class() {
        for class in ["", "  ", "is active"] {
            let config = PaginationConfig {
                active_class: class.into(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(Error::ConfigError(_))),
                "accepted {:?}",
                class
            );
        }
    }
}
