//! Configuration library for the tabsort engine.
//!
//! This crate loads [`SortEngineConfig`](tabsort_core::SortEngineConfig) from
//! files or the environment, installs the `tracing` subscriber used by the
//! `tabsort` binary, and converts JSON table documents to and from table
//! models so the engine can be driven from the command line.

#![allow(missing_docs)]

pub mod loader;
pub mod logging;
pub mod table_io;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, ConfigSource, error::ConfigLoadError};
pub use table_io::{TableDocument, TableIoError};
