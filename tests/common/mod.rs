pub mod synthetic_curve;
