// Domain layer: numeral systems, request/result models and the codec port.

pub mod model;
pub mod ports;
