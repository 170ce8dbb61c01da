//! Contribution table types, snapshot repository, and YAML loading.
//!
//! Statutory deduction schedules are versioned by effective date and never
//! physically deleted. The engine consumes them through an immutable
//! [`TableSnapshot`] taken at call time.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::tables::{ContributionKind, TableLoader};
//!
//! let snapshot = TableLoader::load("./config/tables").unwrap();
//! let sss = snapshot.active(ContributionKind::Sss).unwrap();
//! println!("Active SSS table effective {}", sss.effective_date);
//! ```

mod loader;
mod snapshot;
mod types;

pub use loader::TableLoader;
pub use snapshot::TableSnapshot;
pub use types::{
    ContributionKind, ContributionTable, PagIbigRange, PhilHealthRange, RangeEntry, SssRange,
};
