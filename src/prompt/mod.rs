//! Interactive input acquisition and prompt resolution
//!
//! The module is structured in layers:
//! - `interface`: Pure abstract interfaces independent of any UI library
//! - `dialoguer`: Concrete implementation using the dialoguer library
//! - `automatic_impl`: Scripted implementation for tests and automation
//! - `resolver`: Asks, validates, records and follows up a prompt tree

pub mod automatic_impl;
pub mod dialoguer;
pub mod interface;
pub mod resolver;

pub use interface::*;
pub use resolver::PromptResolver;

use crate::prompt::dialoguer::DialoguerPrompter;

/// Convenience function to create the default prompt provider
pub fn get_prompt_provider() -> impl PromptProvider {
    DialoguerPrompter::new()
}
