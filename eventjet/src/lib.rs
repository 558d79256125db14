//! # Eventjet - guest-list export processing
//!
//! Converts the semicolon-delimited guest list exported from the Eventjet
//! ticketing platform into structured records.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Guest list │────▶│   Decode    │────▶│  GuestList  │────▶│    JSON     │
//! │ (1252/UTF-8)│     │ (auto-enc)  │     │ (row → rec) │     │  (ndjson)   │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use eventjet::{GuestList, GuestListOptions};
//!
//! let list = GuestList::from_path("guestlist.csv", GuestListOptions::default())?;
//! for record in list {
//!     let record = record?;
//!     println!("{}", record.email);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - The structured record ([`GuestRecord`] and its parts)
//! - [`guestlist`] - Row mapping and the guest-list reader
//! - [`decode`] - Encoding detection and decoding
//! - [`export`] - JSON / NDJSON output

// Core modules
pub mod error;
pub mod models;

// Reading
pub mod decode;
pub mod guestlist;

// Output
pub mod export;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{FieldError, FieldResult, GuestListError, GuestListResult};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Address, Event, Guest, GuestRecord, Invoice, Order, Price, Ticket};

// =============================================================================
// Re-exports - Guest list
// =============================================================================

pub use guestlist::{map_row, GuestList, GuestListOptions, Row};

pub use decode::{decode_content, detect_encoding};

// =============================================================================
// Re-exports - Export
// =============================================================================

pub use export::{export, ErrorPolicy, ExportStats, OutputFormat};
