mod aircraft;
mod environment;
mod nav;
mod terrain;

pub use aircraft::*;
pub use environment::*;
pub use nav::*;
pub use terrain::*;
