pub mod definition;
pub mod mode;
pub mod score;
pub mod session;
