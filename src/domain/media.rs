/// Metadata of an uploaded media file.
///
/// The raw bytes travel separately; both live only for the request that
/// carried the upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub filename: String,
    pub mime: String,
}

impl MediaFile {
    pub fn new(filename: impl Into<String>, mime: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            mime: mime.into(),
        }
    }
}
