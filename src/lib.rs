//! A generic data table engine plus the terminal viewer built on it.
//!
//! [`table::DataTable`] owns records, column definitions, the active sort and
//! the row selection. Everything under [`ui`] only reads its view models.

pub mod app;
pub mod config;
pub mod dataset;
pub mod event;
pub mod table;
pub mod ui;
