mod base;
mod builder;
mod op;

pub use base::*;
pub use builder::*;
pub use op::*;
