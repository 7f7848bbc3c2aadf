use encoding_rs::SHIFT_JIS;

use crate::common::error::{QRError, QRResult};

// Legacy double byte transcoding for kanji mode
//------------------------------------------------------------------------------

pub trait Transcoder {
    // Transcodes the whole text or fails if any char is unrepresentable
    fn transcode(&self, text: &str) -> QRResult<Vec<u8>>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ShiftJis;

impl Transcoder for ShiftJis {
    fn transcode(&self, text: &str) -> QRResult<Vec<u8>> {
        let (bytes, _, had_errors) = SHIFT_JIS.encode(text);
        if had_errors {
            return Err(QRError::TranscodingFailure(format!(
                "{text:?} is not representable in Shift JIS"
            )));
        }
        Ok(bytes.into_owned())
    }
}
