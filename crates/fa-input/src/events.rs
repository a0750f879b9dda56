//! CSV event-log loader.
//!
//! # CSV format
//!
//! One row per event, in the order the simulation emitted them.  Columns a
//! kind does not use are left empty.
//!
//! ```csv
//! time,kind,vehicle,carrier,tour,link,shipment,capacity_demand
//! 100,tour_start,veh_1,carrier_1,tour_1,,,
//! 110,pickup_start,veh_1,carrier_1,,,shp_1,5
//! 150,link_enter,veh_1,,,link_12,,
//! 400,delivery_start,veh_1,carrier_1,,,shp_1,5
//! 500,tour_end,veh_1,carrier_1,tour_1,,,
//! ```
//!
//! Rows whose `kind` is not one of the five analysed kinds (the simulation
//! logs many others) are skipped.  Row order is preserved; the loader never
//! sorts by `time`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use fa_core::{EventKind, FreightEvent, VehicleId};

use crate::{InputError, InputResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EventRecord {
    time:            f64,
    kind:            String,
    vehicle:         String,
    carrier:         Option<String>,
    tour:            Option<String>,
    link:            Option<String>,
    shipment:        Option<String>,
    capacity_demand: Option<u32>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the event log at `path`.
pub fn load_events_csv(path: &Path) -> InputResult<Vec<FreightEvent>> {
    let file = std::fs::File::open(path)?;
    load_events_reader(file)
}

/// Like [`load_events_csv`] but accepts any `Read` source.
pub fn load_events_reader<R: Read>(reader: R) -> InputResult<Vec<FreightEvent>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut events = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in csv_reader.deserialize::<EventRecord>().enumerate() {
        let record = result?;
        match EventKind::from_tag(record.kind.trim()) {
            Some(kind) => events.push(into_event(record, kind, i + 1)?),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, "skipped events of kinds the analysis does not consume");
    }
    Ok(events)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn into_event(r: EventRecord, kind: EventKind, row: usize) -> InputResult<FreightEvent> {
    let time = r.time;
    let vehicle: VehicleId = r.vehicle.into();
    let event = match kind {
        EventKind::PickupStart => FreightEvent::ShipmentPickupStart {
            time,
            carrier:         required(r.carrier, "carrier", kind, row)?.into(),
            vehicle,
            shipment:        required(r.shipment, "shipment", kind, row)?.into(),
            capacity_demand: required(r.capacity_demand, "capacity_demand", kind, row)?,
        },
        EventKind::DeliveryStart => FreightEvent::ShipmentDeliveryStart {
            time,
            carrier:         required(r.carrier, "carrier", kind, row)?.into(),
            vehicle,
            shipment:        required(r.shipment, "shipment", kind, row)?.into(),
            capacity_demand: required(r.capacity_demand, "capacity_demand", kind, row)?,
        },
        EventKind::TourStart => FreightEvent::TourStart {
            time,
            carrier: required(r.carrier, "carrier", kind, row)?.into(),
            vehicle,
            tour:    required(r.tour, "tour", kind, row)?.into(),
        },
        EventKind::TourEnd => FreightEvent::TourEnd {
            time,
            carrier: required(r.carrier, "carrier", kind, row)?.into(),
            vehicle,
            tour:    required(r.tour, "tour", kind, row)?.into(),
        },
        EventKind::LinkEnter => FreightEvent::LinkEnter {
            time,
            vehicle,
            link: required(r.link, "link", kind, row)?.into(),
        },
    };
    Ok(event)
}

fn required<T>(value: Option<T>, field: &str, kind: EventKind, row: usize) -> InputResult<T> {
    value.ok_or_else(|| InputError::Parse(format!("event row {row}: {kind} requires `{field}`")))
}
