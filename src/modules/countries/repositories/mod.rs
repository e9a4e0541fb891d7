pub mod country_repository;

pub use country_repository::{CountryRepository, MySqlCountryRepository};
#[cfg(test)]
pub use country_repository::MockCountryRepository;
