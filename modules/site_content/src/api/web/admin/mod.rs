//! HTML admin panel

pub mod handlers;
pub mod views;
