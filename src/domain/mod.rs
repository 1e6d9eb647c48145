// Domain layer: ticket records and the clock port. No I/O here.

pub mod model;
pub mod ports;
