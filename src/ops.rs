pub mod len;
pub mod seq;
