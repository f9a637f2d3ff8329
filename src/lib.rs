//! Gopot - POT template generator for Godot projects
//!
//! Gopot is a CLI tool and library that extracts translatable strings from
//! Godot scene (`.tscn`) and resource (`.tres`) files and writes them into a
//! gettext POT template. A string is translatable when it is assigned to one
//! of the configured fields and starts with `_`.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and run settings
//! - `core`: Extraction pipeline (walk, match, dedup, write)
//! - `error`: Error types

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
