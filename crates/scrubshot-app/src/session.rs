// SPDX-License-Identifier: MIT
//
// Editing session — owns the one image a user is working on.
//
// Lifecycle: created when an upload decodes, the processed image replaced
// by each pipeline result, the whole session discarded when a new upload
// arrives. Processing always starts from the original, so repeated actions
// never compound.

use chrono::{DateTime, Utc};
use image::RgbImage;
use scrubshot_core::{Result, SessionId};
use scrubshot_vision::{decode_image, encode_png};
use tracing::{info, instrument};

/// One user's editing session.
#[derive(Debug, Clone)]
pub struct EditSession {
    /// Session identity, for log correlation.
    pub id: SessionId,
    /// When the upload was accepted.
    pub created_at: DateTime<Utc>,
    original: RgbImage,
    processed: Option<RgbImage>,
}

impl EditSession {
    /// Create a session by decoding uploaded image bytes.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let original = decode_image(data)?;
        let session = Self::from_image(original);
        info!(
            session = %session.id,
            width = session.original.width(),
            height = session.original.height(),
            "Session created"
        );
        Ok(session)
    }

    /// Create a session around an already-decoded image.
    pub fn from_image(original: RgbImage) -> Self {
        Self {
            id: SessionId::new(),
            created_at: Utc::now(),
            original,
            processed: None,
        }
    }

    /// The untouched upload.
    pub fn original(&self) -> &RgbImage {
        &self.original
    }

    /// The most recent processed result, if any.
    pub fn processed(&self) -> Option<&RgbImage> {
        self.processed.as_ref()
    }

    /// Pixel dimensions of the session image.
    pub fn dimensions(&self) -> (u32, u32) {
        self.original.dimensions()
    }

    /// Replace the processed result. Each pipeline run fully replaces the
    /// previous result; there is no partial mutation.
    pub(crate) fn set_processed(&mut self, img: RgbImage) {
        self.processed = Some(img);
    }

    /// Drop the processed result, reverting the download to the original.
    pub fn clear_processed(&mut self) {
        self.processed = None;
    }

    /// PNG bytes for download: the processed result when one exists, the
    /// original otherwise.
    pub fn download_png(&self) -> Result<Vec<u8>> {
        encode_png(self.processed.as_ref().unwrap_or(&self.original))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn session_round_trips_through_png() {
        let img = RgbImage::from_pixel(32, 24, Rgb([1, 2, 3]));
        let bytes = encode_png(&img).expect("encode");

        let session = EditSession::from_bytes(&bytes).expect("decode");
        assert_eq!(session.dimensions(), (32, 24));
        assert!(session.processed().is_none());

        let download = session.download_png().expect("download");
        let round = decode_image(&download).expect("decode download");
        assert_eq!(round, img);
    }

    #[test]
    fn processed_result_replaces_the_download() {
        let mut session = EditSession::from_image(RgbImage::from_pixel(10, 10, Rgb([0, 0, 0])));
        session.set_processed(RgbImage::from_pixel(10, 10, Rgb([255, 255, 255])));

        let download = session.download_png().expect("download");
        let img = decode_image(&download).expect("decode");
        assert_eq!(img.get_pixel(5, 5), &Rgb([255, 255, 255]));

        session.clear_processed();
        let download = session.download_png().expect("download");
        let img = decode_image(&download).expect("decode");
        assert_eq!(img.get_pixel(5, 5), &Rgb([0, 0, 0]));
    }

    #[test]
    fn undecodable_upload_is_an_error() {
        assert!(EditSession::from_bytes(b"not an image").is_err());
    }
}
