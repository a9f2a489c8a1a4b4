//! Route Handlers

pub mod clusters;
pub mod customers;
pub mod predict;
pub mod segments;
