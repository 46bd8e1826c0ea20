// Domain layer: vacancy models, stats and ports. No HTTP or filesystem code here.

pub mod model;
pub mod ports;
