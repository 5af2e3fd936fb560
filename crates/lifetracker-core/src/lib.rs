//! Core state for the LifeTracker terminal app.
//!
//! This crate owns everything that is not rendering: the lifecycle event
//! model, the observable state store, the observer trait the host driver
//! dispatches into, the transient banner state, the app event bus, and the
//! logging subsystem. Rendering lives in `lifetracker-ui`.

pub mod banner;
pub mod bus;
pub mod cell;
pub mod event;
pub mod logging;
pub mod observer;
pub mod store;
