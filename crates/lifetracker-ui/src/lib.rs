//! TUI rendering layer for LifeTracker.
//!
//! Provides the single-screen layout, the shell chrome (title bar, status
//! card, control row, count header), the scrollable event list, and the
//! transient banner overlay. All rendering uses [`ratatui`]; this crate owns
//! the visual presentation while [`lifetracker_core`] owns the state.

pub mod banner;
pub mod layout;
pub mod list;
pub mod shell;
