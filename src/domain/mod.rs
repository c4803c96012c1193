// Domain layer: the principle catalogue and the Demonstration port.

pub mod model;
pub mod ports;
