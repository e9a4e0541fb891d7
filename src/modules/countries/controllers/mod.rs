pub mod country_controller;

pub use country_controller::configure;
