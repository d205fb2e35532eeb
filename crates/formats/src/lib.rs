pub mod catalog_doc;

pub use catalog_doc::*;
