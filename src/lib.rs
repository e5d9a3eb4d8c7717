pub mod diagram;
pub mod error;

pub use caged_engine::*;
pub use diagram::{chord_title, render_chord, render_mode, voicing_summary, ModeLabels};
pub use error::CliError;
