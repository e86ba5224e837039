mod lifecycle;
mod think;

pub use lifecycle::{end, start, status};
pub use think::think;
