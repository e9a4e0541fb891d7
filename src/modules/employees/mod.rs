// Employees module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CreateEmployeeParams, Employee, Gender, UpdateEmployeeParams};
pub use repositories::{EmployeeRepository, MySqlEmployeeRepository};
pub use services::EmployeeService;
