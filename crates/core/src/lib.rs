//! # Typekit
//!
//! A small blocking client for the Typekit kit management API.
//!
//! ## Example
//!
//! ```no_run
//! use typekit::{Client, ClientConfig};
//!
//! let client = Client::new(ClientConfig::new("token")).unwrap();
//! let family = client.family_id("droid-sans").unwrap();
//! let kit_id = client.create_kit("My Kit", &["example.com", "example.org"]).unwrap();
//! println!("{kit_id} uses {family}");
//! ```

pub mod client;
pub mod config;
mod error;
mod kits;
pub mod transport;
pub mod types;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
pub use types::{
    ErrorEnvelope, FamilyEnvelope, FamilyRef, FamilySelection, FamilySpec, InvalidFamilySpec,
    KitDetail, KitEnvelope, KitFamily, KitList, KitSummary,
};
