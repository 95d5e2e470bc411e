// Domain layer: the portfolio document model and the ports the provider is built against.

pub mod model;
pub mod ports;
