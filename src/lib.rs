//! Healthcare AI Dashboard - Market research on AI in healthcare.
//!
//! This crate serves a five-page dashboard built from two CSV datasets and
//! a catalog of published figures, rendered server-side as HTML with
//! inline SVG charts.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
