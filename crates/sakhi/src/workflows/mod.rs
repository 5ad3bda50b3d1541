pub mod assessment;
pub mod companion;
pub mod nudges;
pub mod plans;
pub mod reminders;
pub mod sentiment;
pub mod tracking;
