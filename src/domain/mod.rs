mod analysis;
mod intent;
mod media;
mod transcript;

pub use analysis::Analysis;
pub use intent::Intent;
pub use media::MediaFile;
pub use transcript::Transcript;
