//! Built-in two-carrier scenario.
//!
//! A small parcel carrier runs two light vans; a pallet carrier runs one
//! heavy truck.  Used when no config file is given on the command line.

use std::io::Cursor;

use anyhow::Result;

use fa_input::{
    Scenario, load_carriers_reader, load_events_reader, load_network_reader, load_vehicle_catalog_reader,
};

const VEHICLE_TYPES_CSV: &str = "\
id,capacity,cost_per_second,cost_per_meter,fixed_cost\n\
light_van,10,0.01,0.002,50\n\
heavy_truck,30,0.02,0.004,120\n\
";

const VEHICLES_CSV: &str = "\
vehicle_id,vehicle_type_id\n\
van_1,light_van\n\
van_2,light_van\n\
truck_1,heavy_truck\n\
";

const LINKS_CSV: &str = "\
link_id,length_m\n\
depot_out,300\n\
ring_north,700\n\
ring_south,1250\n\
depot_in,450\n\
";

const CARRIERS_JSON: &str = r#"[
  {
    "id": "parcel_co",
    "selected_plan": {
      "score": -182.4,
      "solver_score": 96.8,
      "scheduled_tours": [
        { "tour": "p_tour_1", "vehicle": "van_1" },
        { "tour": "p_tour_2", "vehicle": "van_2" }
      ]
    },
    "shipments": ["shp_1", "shp_2", "shp_3"],
    "services": []
  },
  {
    "id": "pallet_co",
    "selected_plan": {
      "score": -240.0,
      "solver_score": 151.25,
      "scheduled_tours": [{ "tour": "h_tour_1", "vehicle": "truck_1" }]
    },
    "shipments": ["shp_4"],
    "services": ["svc_1"]
  }
]"#;

// Time-ordered, as the simulation writes it.
const EVENTS_CSV: &str = "\
time,kind,vehicle,carrier,tour,link,shipment,capacity_demand\n\
21600,tour_start,van_1,parcel_co,p_tour_1,,,\n\
21600,pickup_start,van_1,parcel_co,,,shp_1,4\n\
21660,pickup_start,van_1,parcel_co,,,shp_2,3\n\
21700,link_enter,van_1,,,depot_out,,\n\
22500,tour_start,van_2,parcel_co,p_tour_2,,,\n\
22500,pickup_start,van_2,parcel_co,,,shp_3,6\n\
22560,link_enter,van_2,,,depot_out,,\n\
22800,link_enter,van_1,,,ring_north,,\n\
23100,delivery_start,van_1,parcel_co,,,shp_1,4\n\
23400,link_enter,van_2,,,ring_south,,\n\
23400,tour_start,truck_1,pallet_co,h_tour_1,,,\n\
23400,pickup_start,truck_1,pallet_co,,,shp_4,25\n\
23500,link_enter,truck_1,,,depot_out,,\n\
23900,delivery_start,van_1,parcel_co,,,shp_2,3\n\
24000,link_enter,van_1,,,depot_in,,\n\
24300,tour_end,van_1,parcel_co,p_tour_1,,,\n\
24600,delivery_start,van_2,parcel_co,,,shp_3,6\n\
24700,link_enter,truck_1,,,ring_south,,\n\
25200,link_enter,van_2,,,depot_in,,\n\
25500,tour_end,van_2,parcel_co,p_tour_2,,,\n\
26100,delivery_start,truck_1,pallet_co,,,shp_4,25\n\
26400,link_enter,truck_1,,,depot_in,,\n\
27000,tour_end,truck_1,pallet_co,h_tour_1,,,\n\
";

pub fn built_in() -> Result<Scenario> {
    Ok(Scenario {
        events:   load_events_reader(Cursor::new(EVENTS_CSV))?,
        catalog:  load_vehicle_catalog_reader(Cursor::new(VEHICLE_TYPES_CSV), Cursor::new(VEHICLES_CSV))?,
        network:  load_network_reader(Cursor::new(LINKS_CSV))?,
        carriers: load_carriers_reader(Cursor::new(CARRIERS_JSON))?,
    })
}
