// Countries module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Country, CreateCountryParams, UpdateCountryParams};
pub use repositories::{CountryRepository, MySqlCountryRepository};
pub use services::CountryService;
