//! Inline element registry for section content.
//!
//! Section content is mixed text and markup. Handlers are registered for
//! the markup elements that become wiki syntax; everything else is dropped.

mod config;
mod core;
mod engine;
mod handler;
pub mod handlers;
mod types;

pub use config::create_content_registry;
pub use core::ElementRegistry;
pub use engine::ContentEngine;
pub use handler::ElementHandler;
pub use types::{category_names, ParseResult, ResolveContext, ResolveStats};
