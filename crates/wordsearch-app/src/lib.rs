//! Shared library module for the wordsearch terminal app.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod action;
pub mod cli;
pub mod game_factory;
pub mod persistence;
pub mod render;
pub mod session;
