mod distribute;
mod verify;

pub use distribute::*;
pub use verify::*;
