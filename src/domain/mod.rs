pub mod dispatch;
pub mod fuel;
pub mod plant;

pub use dispatch::*;
pub use fuel::*;
pub use plant::*;
