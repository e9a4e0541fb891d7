pub mod doc_type_controller;

pub use doc_type_controller::configure;
