pub mod cars;
pub mod client;

pub use cars::Vehicle;
pub use client::{CarQuery, CarsClient};
