//! Strongly typed, string-backed identifier wrappers.
//!
//! The upstream simulation names every entity with a free-form string, so each
//! ID wraps a `String`.  All IDs are `Ord + Hash`; ascending lexical order is
//! the order every report iterates in.  `Display` prints the raw identifier so
//! IDs can be written straight into report cells.

use std::fmt;

/// Generate a typed ID wrapper around a `String`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        $vis struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

typed_id! {
    /// A freight vehicle.  One vehicle drives at most one scheduled tour in a
    /// well-formed scenario.
    pub struct VehicleId;
}

typed_id! {
    /// A vehicle type: shared capacity and cost rates.
    pub struct VehicleTypeId;
}

typed_id! {
    /// A carrier (logistics operator).
    pub struct CarrierId;
}

typed_id! {
    /// A tour, unique only within its carrier.
    pub struct TourId;
}

typed_id! {
    /// A directed network link.
    pub struct LinkId;
}

typed_id! {
    pub struct ShipmentId;
}

typed_id! {
    pub struct ServiceId;
}
