// Domain layer: the contact model and the ports the core implements.

pub mod model;
pub mod ports;
