mod doc_type;

pub use doc_type::DocType;
