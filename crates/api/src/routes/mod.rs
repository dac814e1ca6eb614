pub mod form;
pub mod health;
