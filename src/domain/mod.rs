// Domain layer: content models and ports (interfaces). No dependencies beyond std/serde/url.

pub mod model;
pub mod ports;
