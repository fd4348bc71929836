// Domain layer: ticket model and the ports the loaders implement.

pub mod model;
pub mod ports;
