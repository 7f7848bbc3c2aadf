//! # qrcraft
//!
//! A Rust library for encoding text into QR code symbols with Reed-Solomon error correction.
//!
//! ## Features
//!
//! - **Automatic mode selection**: Numeric, alphanumeric, kanji or byte, whichever fits the text
//! - **Minimal version**: Picks the smallest of the 40 versions that holds the data
//! - **Reed-Solomon Error Correction**: GF(256) error correction with configurable levels (L, M, Q, H)
//! - **Mask selection**: Scores all 8 mask patterns in parallel and keeps the best one
//!
//! ## Quick Start
//!
//! ### Simple QR Code Generation
//!
//! ```rust
//! use qrcraft::QRBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Simplest usage - provide only text, all other settings are automatically chosen
//! let qr = QRBuilder::new("Hello, World!").build()?;
//!
//! assert_eq!(qr.width(), 21);
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrcraft::{ECLevel, MaskPattern, Mode, PenaltyRules, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("HELLO WORLD")
//!     .version(Version::new(2)?)             // QR version (size) - if not provided, finds smallest version to fit data
//!     .ec_level(ECLevel::Q)                  // Error correction level - if not provided, defaults to ECLevel::M
//!     .mode(Mode::Alphanumeric)              // Encoding mode - if not provided, picked from the text
//!     .penalty_rules(PenaltyRules::Iso)      // Mask scoring rules - if not provided, defaults to PenaltyRules::Basic
//!     .mask(MaskPattern::try_from(3)?)       // Mask pattern - if not provided, finds best mask based on penalty score
//!     .build()?;
//!
//! for r in 0..qr.width() as i16 {
//!     let line: String =
//!         (0..qr.width() as i16).map(|c| if qr.get(r, c).is_dark() { '#' } else { ' ' }).collect();
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## QR Code Components
//!
//! ### Versions
//! Versions 1-40, with sizes from 21x21 to 177x177 modules
//!
//! ### Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! ### Modes
//! - **Numeric**: Digits, 3 per 10 bits
//! - **Alphanumeric**: Upper case letters, digits & ` $%*+-./:`, 2 per 11 bits
//! - **Kanji**: Shift JIS double byte characters, 13 bits each
//! - **Byte**: Raw UTF-8 bytes, 8 bits each
//!
//! Rendering the finished symbol is left to the caller: [`QR::modules`] exposes the
//! module grid row by row.

#![allow(clippy::items_after_test_module, clippy::suspicious_arithmetic_impl)]

pub mod builder;
pub(crate) mod common;

pub use builder::{Module, ModuleValue, QRBuilder, QR};
pub use common::bit_utils::{BitReader, BitStream};
pub use common::codec::{Mode, ShiftJis, Transcoder};
pub use common::ec;
pub use common::error::{QRError, QRResult};
pub use common::mask::{MaskPattern, PenaltyRules};
pub use common::metadata::{BlockGroup, ECLevel, ECProfile, Version};
