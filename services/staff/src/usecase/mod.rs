pub mod assignment;
pub mod clock_entry;
pub mod employee;
pub mod overview;
pub mod position;
pub mod schedule;
