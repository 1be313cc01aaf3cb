pub mod brew;
pub mod shift;
pub mod window;
