//! sea-orm entities for the staff service tables.

pub mod assignments;
pub mod clock_entries;
pub mod employees;
pub mod positions;
pub mod schedules;
