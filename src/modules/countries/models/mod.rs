mod country;
mod validator;

pub use country::{Country, CreateCountryParams, UpdateCountryParams, COUNTRY_ORIGIN};
pub use validator::CountryValidator;
