use std::error::Error;

use qrcraft::QRBuilder;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Simplest usage - provide only text, all other settings are automatically chosen
    let qr = QRBuilder::new("Hello, World!").build()?;

    // Print with a 2 module quiet zone, dark modules as full blocks
    let w = qr.width() as i16;
    let quiet = "  ".repeat(w as usize + 4);
    println!("{quiet}\n{quiet}");
    for r in 0..w {
        let line: String =
            (0..w).map(|c| if qr.get(r, c).is_dark() { "██" } else { "  " }).collect();
        println!("    {line}    ");
    }
    println!("{quiet}\n{quiet}");

    println!("QR metadata: {}", qr.metadata());
    Ok(())
}
