// Domain layer: request/result models and the ports (traits) implemented by adapters.

pub mod model;
pub mod ports;
