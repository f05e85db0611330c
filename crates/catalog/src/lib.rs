//! `trimdesk-catalog` — barbers and bookable services.
//!
//! Read-only reference data for the booking form: who cuts and what
//! they offer.

pub mod model;

pub use model::{Barber, Service, fetch_barbers, fetch_catalog, fetch_services};
