// Domain layer: promotion types and the catalog port. No I/O here.

pub mod model;
pub mod ports;
