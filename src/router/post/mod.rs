pub mod authenticate;
pub mod objects;
