pub mod grid;
pub mod manifest;
pub mod png;
pub mod tsv;
