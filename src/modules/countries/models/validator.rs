use crate::core::validation::{FieldErrors, Validator};

pub const MAX_CODE_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_COIN_CODE_LENGTH: usize = 3;
pub const MAX_COIN_SYMBOL_LENGTH: usize = 5;

#[derive(Debug, Default)]
pub struct CountryValidator {
    errors: FieldErrors,
}

impl CountryValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate_code(&mut self, code: &str) {
        self.errors.check_required_text("Code", code, MAX_CODE_LENGTH);
    }

    pub fn validate_name(&mut self, name: &str) {
        self.errors.check_required_text("Name", name, MAX_NAME_LENGTH);
    }

    pub fn validate_coin_code(&mut self, coin_code: &str) {
        self.errors
            .check_required_text("CoinCode", coin_code, MAX_COIN_CODE_LENGTH);
    }

    pub fn validate_coin_symbol(&mut self, coin_symbol: &str) {
        self.errors
            .check_required_text("CoinSymbol", coin_symbol, MAX_COIN_SYMBOL_LENGTH);
    }
}

impl Validator for CountryValidator {
    fn field_errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn into_field_errors(self) -> FieldErrors {
        self.errors
    }
}
