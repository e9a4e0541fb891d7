mod employee;
mod validator;

pub use employee::{
    CreateEmployeeParams, Employee, Gender, UpdateEmployeeParams, EMPLOYEE_ORIGIN,
};
pub use validator::EmployeeValidator;
