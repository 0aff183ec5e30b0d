// Domain layer: submission model and ports. No network or terminal code here.

pub mod model;
pub mod ports;
