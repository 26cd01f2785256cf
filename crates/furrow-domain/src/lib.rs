//! Pure business rules for the shop back office: recurring calendar
//! expansion and order status presentation. Nothing here performs I/O.

pub mod error;
pub mod order;
pub mod recurrence;
