pub mod backup;
pub mod clock;
pub mod controller;
pub mod filter;
pub mod log;
