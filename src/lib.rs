#![recursion_limit = "256"]
//! Async client for the [Acuparse](https://www.acuparse.com/) weather
//! station API.
//!
//! Acuparse reports every unit-bearing reading under two vendor field names
//! at once (`tempC`/`tempF`, `windSpeedKMH`/`windSpeedMPH`, ...). This crate
//! fetches the health, dashboard and archive endpoints and flattens those
//! payloads into unit-agnostic records: pick a [`Units`] and each quantity
//! comes back under a single name, tagged with the selected unit system.
//!
//! ```no_run
//! use acuparse_client::{Acuparse, Units};
//!
//! # async fn run() -> acuparse_client::Result<()> {
//! let station = Acuparse::new("http://station.local")?;
//! let current = station.get_main(Units::Metric).await?;
//! println!("temperature: {:?}", current.temp.temp);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod constants;
pub mod error;
pub mod models;
pub mod normalize;

pub use client::Acuparse;
pub use error::{Error, Result};
pub use models::{Archive, Health, Main, Units};
