// Domain layer: card models and ports. Nothing here renders or touches the filesystem.

pub mod model;
pub mod ports;
