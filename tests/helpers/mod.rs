// Shared test infrastructure.
//
// Flow and HTTP tests run the real services against in-memory repositories
// that follow the MySQL repositories' contracts (soft delete, NOT_FOUND on
// missing rows, DUPLICATE_ENTRY on unique keys). The MySQL-backed suite
// lives in `mysql_repository_test.rs` and needs TEST_DATABASE_URL.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;
#![allow(dead_code)]

pub mod in_memory;
pub mod test_data;

pub use in_memory::*;
pub use test_data::*;
