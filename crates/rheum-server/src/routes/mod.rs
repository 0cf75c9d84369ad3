pub mod catalog;
pub mod health;
pub mod intake;
pub mod result;
pub mod session;
