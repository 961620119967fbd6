// common helpers
pub mod errors;
pub mod kinds;
pub mod report;
pub mod rounding;
pub mod scale;
pub mod values;

// interpolation core
pub(crate) mod interp;
pub(crate) mod simplify;

pub mod linear;
