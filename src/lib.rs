//! Hover-triggered tooltip component
//!
//! [`tooltip::render`] turns a [`tooltip::TooltipConfig`] into a [`markup::Node`] tree that
//! serializes to HTML. The remaining modules back the `tiptrigger` binary: config files,
//! and a terminal preview of the hover/focus behaviour.

pub mod app;
pub mod config;
pub mod error;
pub mod markup;
pub mod theme;
pub mod tooltip;
pub mod ui;
