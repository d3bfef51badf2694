pub mod check;
pub mod pair;
pub mod validate;
