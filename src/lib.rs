//! # bijak
//!
//! GST-compliant invoicing core for small Indian businesses: tax
//! computation, amounts in words, and printable PDF tax invoices.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Computation keeps full precision; rounding to two fractional digits
//! happens only when the renderer formats a value.
//!
//! ## Quick Start
//!
//! ```rust
//! use bijak::core::*;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let items = vec![LineItem::new("MS CENTRING SHEETS", "7308", dec!(100), dec!(73), "Kgs")];
//! let breakup = compute_gst(items, "36", "36", DEFAULT_GST_RATE).unwrap();
//!
//! // Intra-state: the 18% rate splits into 9% CGST + 9% SGST
//! assert_eq!(breakup.subtotal, dec!(7300));
//! assert_eq!(breakup.cgst, dec!(657));
//! assert_eq!(breakup.sgst, dec!(657));
//! assert_eq!(breakup.igst, dec!(0));
//! assert_eq!(breakup.grand_total, dec!(8614));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice types, GST computation, validation, numbering |
//! | `words` (default) | Amounts in words (Indian numbering convention) |
//! | `pdf` | Printable A4 tax-invoice rendering & export |
//! | `store` | Typed in-memory Customer/Product repositories |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "words")]
pub mod words;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "store")]
pub mod store;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
