//! The freight event model.
//!
//! Events are produced by the upstream simulation in non-decreasing `time`
//! order.  That ordering is a precondition of every consumer in this
//! workspace: nothing re-sorts the stream, so an out-of-order stream surfaces
//! as a missing-pairing error downstream instead of being silently repaired.

use std::fmt;

use crate::{CarrierId, LinkId, ShipmentId, TourId, VehicleId};

// ── EventKind ─────────────────────────────────────────────────────────────────

/// Discriminant of [`FreightEvent`] with a stable text tag.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EventKind {
    PickupStart,
    DeliveryStart,
    TourStart,
    TourEnd,
    LinkEnter,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::PickupStart,
        EventKind::DeliveryStart,
        EventKind::TourStart,
        EventKind::TourEnd,
        EventKind::LinkEnter,
    ];

    /// Tag used in event log files and log lines.
    pub fn tag(self) -> &'static str {
        match self {
            EventKind::PickupStart   => "pickup_start",
            EventKind::DeliveryStart => "delivery_start",
            EventKind::TourStart     => "tour_start",
            EventKind::TourEnd       => "tour_end",
            EventKind::LinkEnter     => "link_enter",
        }
    }

    /// Inverse of [`tag`][Self::tag].  Returns `None` for any other event
    /// type the simulation may have logged.
    pub fn from_tag(tag: &str) -> Option<EventKind> {
        Self::ALL.into_iter().find(|k| k.tag() == tag)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ── FreightEvent ──────────────────────────────────────────────────────────────

/// One simulation event consumed by the analysis.
///
/// `capacity_demand` is always a magnitude; pickups add it to a vehicle's
/// load and deliveries subtract it.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FreightEvent {
    ShipmentPickupStart {
        time:            f64,
        carrier:         CarrierId,
        vehicle:         VehicleId,
        shipment:        ShipmentId,
        capacity_demand: u32,
    },
    ShipmentDeliveryStart {
        time:            f64,
        carrier:         CarrierId,
        vehicle:         VehicleId,
        shipment:        ShipmentId,
        capacity_demand: u32,
    },
    TourStart {
        time:    f64,
        carrier: CarrierId,
        vehicle: VehicleId,
        tour:    TourId,
    },
    TourEnd {
        time:    f64,
        carrier: CarrierId,
        vehicle: VehicleId,
        tour:    TourId,
    },
    LinkEnter {
        time:    f64,
        vehicle: VehicleId,
        link:    LinkId,
    },
}

impl FreightEvent {
    /// Simulation time in seconds.
    pub fn time(&self) -> f64 {
        match self {
            FreightEvent::ShipmentPickupStart { time, .. }
            | FreightEvent::ShipmentDeliveryStart { time, .. }
            | FreightEvent::TourStart { time, .. }
            | FreightEvent::TourEnd { time, .. }
            | FreightEvent::LinkEnter { time, .. } => *time,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            FreightEvent::ShipmentPickupStart { .. }   => EventKind::PickupStart,
            FreightEvent::ShipmentDeliveryStart { .. } => EventKind::DeliveryStart,
            FreightEvent::TourStart { .. }             => EventKind::TourStart,
            FreightEvent::TourEnd { .. }               => EventKind::TourEnd,
            FreightEvent::LinkEnter { .. }             => EventKind::LinkEnter,
        }
    }

    /// Every event kind names the vehicle it concerns.
    pub fn vehicle(&self) -> &VehicleId {
        match self {
            FreightEvent::ShipmentPickupStart { vehicle, .. }
            | FreightEvent::ShipmentDeliveryStart { vehicle, .. }
            | FreightEvent::TourStart { vehicle, .. }
            | FreightEvent::TourEnd { vehicle, .. }
            | FreightEvent::LinkEnter { vehicle, .. } => vehicle,
        }
    }
}
