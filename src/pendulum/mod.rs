pub mod damped_pendulum;
pub mod trajectory;
