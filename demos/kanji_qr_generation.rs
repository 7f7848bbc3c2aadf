use std::error::Error;

use qrcraft::{ECLevel, Mode, QRBuilder, QRError};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Shift JIS representable text is picked up as kanji mode, 13 bits per char
    let qr = QRBuilder::new("漢字モード").ec_level(ECLevel::Q).build()?;
    assert_eq!(qr.mode(), Mode::Kanji);
    println!("Kanji QR metadata: {}", qr.metadata());

    // Mixed text falls back to byte mode
    let qr = QRBuilder::new("QRコード 2024").build()?;
    println!("Mixed QR metadata: {}", qr.metadata());

    // Forcing kanji mode on text Shift JIS can't represent fails
    match QRBuilder::new("한국어").mode(Mode::Kanji).build() {
        Err(err @ QRError::TranscodingFailure(_)) => println!("Expected failure: {err}"),
        other => println!("Unexpected result: {other:?}"),
    }

    Ok(())
}
