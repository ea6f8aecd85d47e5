//! Sky coordinates: equatorial right ascension / declination and their
//! geocentric unit-vector form.
//!
//! Every sky layer places its objects with [`geocentric_coords`], so custom
//! objects line up with built-in ones. The frame is right-handed with the
//! x axis towards RA 0°, the y axis towards RA 90° and the z axis towards the
//! north celestial pole.
//!
//! ```rust
//! use skymap_coords::{RaDec, geocentric_coords};
//!
//! let v = geocentric_coords(90.0, 0.0);
//! assert!((v.y - 1.0).abs() < 1e-6);
//!
//! let back = RaDec::from_geocentric(v);
//! assert!((back.ra - 90.0).abs() < 1e-4);
//! ```

mod geocentric;

pub use geocentric::{RaDec, angular_distance_deg, geocentric_coords, hours_to_degrees};
