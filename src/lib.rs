//! Multi-tenant payroll core library
//!
//! Countries and their document types are shared reference data. Workspaces
//! and employees belong to a tenant.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::countries;
pub use modules::doc_types;
pub use modules::employees;
pub use modules::workspaces;
pub use modules::AppServices;
