//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::tables::TableSnapshot;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently the contribution-table snapshot loaded at startup.
#[derive(Clone)]
pub struct AppState {
    /// The contribution tables the engine resolves against.
    tables: Arc<TableSnapshot>,
}

impl AppState {
    /// Creates a new application state with the given table snapshot.
    pub fn new(tables: TableSnapshot) -> Self {
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Returns a reference to the table snapshot.
    pub fn tables(&self) -> &TableSnapshot {
        &self.tables
    }
}
