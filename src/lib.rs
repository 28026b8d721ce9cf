pub mod calib;
pub mod dataset;
pub mod error;
pub mod io;
pub mod qualitative;
pub mod registry;
pub mod stages;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);
