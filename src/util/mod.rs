pub mod deadline;
pub mod telemetry;

pub use deadline::*;
pub use telemetry::*;
