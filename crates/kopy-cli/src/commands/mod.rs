pub mod fetch;
pub mod passgen;
pub mod send;
