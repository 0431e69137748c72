//! Tonny.dev Portfolio - Leptos Frontend Library

pub mod app;
pub mod components;
pub mod content;
pub mod formatters;
pub mod pages;
