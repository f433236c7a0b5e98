// Domain layer: check models and the checker port.

pub mod model;
pub mod ports;
