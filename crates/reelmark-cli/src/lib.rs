//! Command line host for reelmark.
//!
//! Implements the document-store and picker collaborators over plain files
//! and wires the core controller to the mpv launcher.

pub mod cli;
pub mod commands;
pub mod config;
pub mod store;
