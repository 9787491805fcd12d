// Domain layer: value types and the translation port. No formatting logic lives here.

pub mod model;
pub mod ports;
