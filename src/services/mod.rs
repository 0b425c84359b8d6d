pub mod bulk_edit;
pub mod bulk_update;
pub mod edit_tracker;
pub mod employee_mapper;
pub mod pay;
pub mod time_aggregator;

pub use bulk_edit::BulkEditSession;
pub use edit_tracker::{EditTracker, FieldMap};
