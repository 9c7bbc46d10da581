#![no_std]

//! Greenhouse control page
//!
//! The template carries `%TOKEN%` placeholders that the controller substitutes
//! with live readings and switch states before serving it.

/// Raw HTML template of the control page.
pub const PAGE_TEMPLATE: &str = include_str!("../index.html");
