// Domain layer: identifier value types and the digit-source port.

pub mod model;
pub mod ports;
