//! Race engine, cancellation signal, and the values flowing through a race.

pub mod error;
pub mod fallback;
pub mod operation;
pub mod outcome;
pub mod race;
pub mod race_timeout;
pub mod signal;
pub mod spawn;

pub use error::{AppResult, RaceError};
pub use fallback::Fallback;
pub use operation::Operation;
pub use outcome::{RaceOutcome, Settlement};
pub use race::{race, race_or_elapsed, race_with_error, race_with_function, race_with_value};
pub use race_timeout::RaceTimeout;
pub use signal::{CancellationSignal, CancellationSource};
pub use spawn::Spawn;
