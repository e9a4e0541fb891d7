pub mod employee_repository;

pub use employee_repository::{EmployeeRepository, MySqlEmployeeRepository};
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
