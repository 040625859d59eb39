pub mod objects;
pub mod status;
