//! Template processing engine for generoo
//!
//! This module contains the core template processing components:
//! - `conditions`: Evaluates conditional markers embedded in destination paths
//! - `operation`: Defines operations to be performed on templates
//! - `processor`: Walks template files and materializes them

pub mod conditions;
pub mod operation;
pub mod processor;
