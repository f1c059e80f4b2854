//! Satellite Commander
//!
//! Drives a simulated satellite through commands that are built against the
//! receiver up front and executed later through a uniform interface.

pub mod command;
pub mod driver;
