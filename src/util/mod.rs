pub mod figment;
pub mod sensitive;
