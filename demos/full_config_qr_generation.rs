use std::error::Error;

use qrcraft::{ECLevel, MaskPattern, Mode, PenaltyRules, QRBuilder, Version};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let data = "THIS EXAMPLE SHOWS ALL AVAILABLE CONFIGURATION OPTIONS";

    let qr = QRBuilder::new(data)
        .version(Version::new(4)?)        // QR version (size) - if not provided, finds smallest version to fit data
        .ec_level(ECLevel::H)             // Error correction level - if not provided, defaults to ECLevel::M
        .mode(Mode::Alphanumeric)         // Encoding mode - if not provided, picked from the text
        .penalty_rules(PenaltyRules::Iso) // Mask scoring - if not provided, defaults to PenaltyRules::Basic
        .mask(MaskPattern::try_from(2)?)  // Mask pattern - if not provided, finds best mask based on penalty score
        .build()?;

    for row in qr.modules().chunks(qr.width()) {
        let line: String = row.iter().map(|m| if m.is_dark() { '#' } else { '.' }).collect();
        println!("{line}");
    }

    println!("QR metadata: {}", qr.metadata());
    println!("Dark modules: {} of {}", qr.count_dark_modules(), qr.width() * qr.width());

    Ok(())
}
