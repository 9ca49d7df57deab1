mod analyze;
mod health;
mod transcribe;

pub use analyze::analyze_handler;
pub use health::health_handler;
pub use transcribe::transcribe_handler;
