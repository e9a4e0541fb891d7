pub mod employee_controller;

pub use employee_controller::{configure, configure_workspace_routes};
