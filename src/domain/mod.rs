// Domain layer: core models and ports (interfaces). No DOM, no transport.

pub mod model;
pub mod ports;
