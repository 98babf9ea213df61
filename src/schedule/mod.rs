pub mod clock;
pub mod games;
pub mod validation;
