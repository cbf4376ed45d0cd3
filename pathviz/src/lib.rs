//! pathviz: step-by-step grid search, driven from the command line.
//!
//! [`Session`] holds the board being edited together with the chosen
//! start, end and algorithm, and runs searches against it. [`Settings`]
//! carries the tunables loaded from a TOML file.

pub mod session;
pub mod settings;

pub use session::{Report, Session, SessionError};
pub use settings::{Settings, SettingsError};
