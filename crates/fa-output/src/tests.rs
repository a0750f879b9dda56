//! Unit and end-to-end tests for fa-output.

use fa_analysis::FreightAnalysis;
use fa_core::{
    Carrier, CarrierPlan, Carriers, CostInformation, FreightEvent, LinkNetwork, LinkNetworkBuilder,
    ScheduledTour, VehicleCatalog, VehicleType,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn pickup(time: f64, vehicle: &str, demand: u32) -> FreightEvent {
    FreightEvent::ShipmentPickupStart {
        time,
        carrier:         "c1".into(),
        vehicle:         vehicle.into(),
        shipment:        "s1".into(),
        capacity_demand: demand,
    }
}

fn delivery(time: f64, vehicle: &str, demand: u32) -> FreightEvent {
    FreightEvent::ShipmentDeliveryStart {
        time,
        carrier:         "c1".into(),
        vehicle:         vehicle.into(),
        shipment:        "s1".into(),
        capacity_demand: demand,
    }
}

fn tour_start(time: f64, tour: &str, vehicle: &str) -> FreightEvent {
    FreightEvent::TourStart { time, carrier: "c1".into(), vehicle: vehicle.into(), tour: tour.into() }
}

fn tour_end(time: f64, tour: &str, vehicle: &str) -> FreightEvent {
    FreightEvent::TourEnd { time, carrier: "c1".into(), vehicle: vehicle.into(), tour: tour.into() }
}

fn link_enter(time: f64, vehicle: &str, link: &str) -> FreightEvent {
    FreightEvent::LinkEnter { time, vehicle: vehicle.into(), link: link.into() }
}

fn light_rates() -> CostInformation {
    CostInformation { per_second: 0.01, per_meter: 0.002, fixed: 50.0 }
}

/// `light` (capacity 10) for v1 and v2, `heavy` (capacity 30) for v3.
fn catalog() -> VehicleCatalog {
    let mut cat = VehicleCatalog::new();
    cat.add_type(VehicleType::new("light", 10.0, light_rates()));
    cat.add_type(VehicleType::new("heavy", 30.0, CostInformation { per_second: 0.02, per_meter: 0.004, fixed: 120.0 }));
    cat.assign("v1", "light").unwrap();
    cat.assign("v2", "light").unwrap();
    cat.assign("v3", "heavy").unwrap();
    cat
}

/// `a` = 300 m, `b` = 700 m.
fn network() -> LinkNetwork {
    let mut b = LinkNetworkBuilder::new();
    b.add_link("a", 300.0).unwrap();
    b.add_link("b", 700.0).unwrap();
    b.build()
}

fn carriers() -> Carriers {
    let mut c = Carrier::new(
        "c1",
        CarrierPlan {
            score:           -120.5,
            solver_score:    -56.0,
            scheduled_tours: vec![ScheduledTour { tour: "t1".into(), vehicle: "v1".into() }],
        },
    );
    c.shipments = vec!["s1".into()];
    [c].into_iter().collect()
}

/// One tour of v1 from t=100 to t=500 over links a and b, carrying 5 units.
fn reference_events() -> Vec<FreightEvent> {
    vec![
        tour_start(100.0, "t1", "v1"),
        pickup(120.0, "v1", 5),
        link_enter(150.0, "v1", "a"),
        link_enter(300.0, "v1", "b"),
        delivery(400.0, "v1", 5),
        tour_end(500.0, "t1", "v1"),
    ]
}

fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

// ── Formatting ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod format_tests {
    use crate::format::{profile, real, round2};

    #[test]
    fn reals_keep_a_fractional_digit() {
        assert_eq!(real(400.0), "400.0");
        assert_eq!(real(0.002), "0.002");
        assert_eq!(real(-2.0), "-2.0");
    }

    #[test]
    fn round2_half_away_from_zero() {
        assert_eq!(round2(12.346), 12.35);
        assert_eq!(round2(0.1111), 0.11);
        assert_eq!(round2(-1.006), -1.01);
    }

    #[test]
    fn profile_cell() {
        assert_eq!(profile(&[5, 0]), "[5, 0]");
        assert_eq!(profile(&[3, 7, -1]), "[3, 7, -1]");
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;
    use crate::OutputError;
    use crate::row::{load_rows, load_summary, vehicle_cost_rows, vehicle_type_cost_rows};

    #[test]
    fn load_row_of_reference_tour() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&reference_events()).unwrap();

        let rows = load_rows(&a).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].max_load, 5);
        assert_eq!(rows[0].unused_capacity, 5.0);
        assert_eq!(rows[0].profile, [5, 0]);
    }

    #[test]
    fn overloaded_vehicle_has_negative_unused_capacity() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&[pickup(0.0, "v1", 12), delivery(1.0, "v1", 12)]).unwrap();

        let rows = load_rows(&a).unwrap();
        assert_eq!(rows[0].unused_capacity, -2.0);
        assert_eq!(rows[0].utilization(), 1.2);
    }

    #[test]
    fn mean_utilization_over_vehicles() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&[pickup(0.0, "v1", 5), pickup(0.0, "v3", 25)]).unwrap();

        let summary = load_summary(&load_rows(&a).unwrap()).unwrap();
        assert_eq!(summary.used_vehicle_types, 2);
        assert_eq!(summary.utilization_percent(), 67.0);
    }

    #[test]
    fn empty_load_summary_is_degenerate() {
        let err = load_summary(&[]).unwrap_err();
        assert!(matches!(err, OutputError::DegenerateAggregate(_)));
    }

    #[test]
    fn zero_capacity_is_degenerate() {
        let mut cat = VehicleCatalog::new();
        cat.add_type(VehicleType::new("bike", 0.0, light_rates()));
        cat.assign("v1", "bike").unwrap();
        let net = network();
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&[pickup(0.0, "v1", 1)]).unwrap();

        let err = load_summary(&load_rows(&a).unwrap()).unwrap_err();
        assert!(matches!(err, OutputError::DegenerateAggregate(_)));
    }

    #[test]
    fn unresolved_vehicle_fails_load_rows() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&[pickup(0.0, "ghost", 1)]).unwrap();

        let err = load_rows(&a).unwrap_err();
        assert!(matches!(err, OutputError::UnresolvedVehicleType(v) if v.as_str() == "ghost"));
    }

    #[test]
    fn vehicle_cost_of_reference_tour() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&reference_events()).unwrap();

        let rows = vehicle_cost_rows(&a).unwrap();
        assert_eq!(rows.len(), 1);
        let r = &rows[0];
        assert_eq!((r.duration_s, r.distance_m), (400.0, 1000.0));
        assert!((r.cost.var_cost_time - 4.0).abs() < 1e-9);
        assert!((r.cost.var_cost_distance - 2.0).abs() < 1e-9);
        assert!((r.cost.total_cost - 56.0).abs() < 1e-9);
    }

    #[test]
    fn type_rows_cover_unused_catalog_types() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&reference_events()).unwrap();

        let rows = vehicle_type_cost_rows(&a).unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.vehicle_type.as_str()).collect();
        assert_eq!(ids, ["heavy", "light"]);
        assert_eq!(rows[0].vehicles, 0);
        assert_eq!(rows[0].cost.total_cost, 0.0);
        assert_eq!(rows[1].vehicles, 1);
        assert_eq!(rows[1].cost.fixed_cost, 50.0);
    }

    #[test]
    fn untyped_vehicle_distance_fails_type_rows() {
        let (cat, net) = (catalog(), network());
        let mut events = reference_events();
        events.insert(3, link_enter(160.0, "ghost", "b"));
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&events).unwrap();

        assert_eq!(a.tours.distance(&"ghost".into()), Some(700.0));
        let err = vehicle_type_cost_rows(&a).unwrap_err();
        assert!(matches!(err, OutputError::UnresolvedVehicleType(v) if v.as_str() == "ghost"));
        // The per-vehicle table only lists toured vehicles and does not need ghost's type.
        assert_eq!(vehicle_cost_rows(&a).unwrap().len(), 1);
    }

    #[test]
    fn type_totals_equal_vehicle_totals() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&[
            tour_start(0.0, "t1", "v1"),
            tour_start(0.0, "t2", "v2"),
            link_enter(10.0, "v1", "a"),
            link_enter(10.0, "v2", "b"),
            tour_end(100.0, "t1", "v1"),
            tour_end(300.0, "t2", "v2"),
        ])
        .unwrap();

        let per_vehicle = vehicle_cost_rows(&a).unwrap();
        let light = vehicle_type_cost_rows(&a)
            .unwrap()
            .into_iter()
            .find(|r| r.vehicle_type.as_str() == "light")
            .unwrap();
        let total: f64 = per_vehicle.iter().map(|r| r.cost.total_cost).sum();
        assert_eq!(light.vehicles, 2);
        assert!((light.cost.total_cost - total).abs() < 1e-9);
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::row::GeneralStats;
    use crate::render::render_general_stats;
    use crate::{ReportEmitter, ReportKind};
    use fa_analysis::CarrierSummary;

    #[test]
    fn load_per_vehicle_bytes() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&reference_events()).unwrap();
        let text = ReportEmitter::new(&a, &carriers()).render(ReportKind::LoadPerVehicle).unwrap();
        assert_eq!(
            text,
            "vehicleId ; vehicleTypeId ; capacity ; maxLoad ; unusedCapacity; load state during tour\n\
             v1;light;10.0;5;5.0;[5, 0]\n"
        );
    }

    #[test]
    fn load_summary_tiles() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&reference_events()).unwrap();
        let text = ReportEmitter::new(&a, &carriers()).render(ReportKind::LoadSummary).unwrap();
        assert_eq!(text, "Used vehicle types,1,car\nAverage use of capacity,50.0%,chart-pie\n");
    }

    #[test]
    fn time_distance_per_vehicle_row() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&reference_events()).unwrap();
        let text = ReportEmitter::new(&a, &carriers()).render(ReportKind::TimeDistancePerVehicle).unwrap();
        let l = lines(&text);
        assert_eq!(l.len(), 2);
        assert!(l[0].starts_with("vehicleId ; carrierId ; vehicleTypeId ; tourId ; tourDuration[s] ;"));
        assert!(l[0].ends_with("; totalCosts[EUR]"));
        assert_eq!(l[1], "v1;c1;light;t1;400.0;1000.0;0.01;0.002;50.0;4.0;2.0;56.0");
    }

    #[test]
    fn time_distance_per_type_rows() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&reference_events()).unwrap();
        let text = ReportEmitter::new(&a, &carriers()).render(ReportKind::TimeDistancePerVehicleType).unwrap();
        let l = lines(&text);
        assert!(l[0].starts_with("vehicleTypeId ; nuOfVehicles ;"));
        assert_eq!(&l[1..], [
            "heavy;0;0.0;0.0;0.02;0.004;120.0;0.0;0.0;0.0;0.0",
            "light;1;400.0;1000.0;0.01;0.002;50.0;4.0;2.0;50.0;56.0",
        ]);
    }

    #[test]
    fn general_stats_tiles() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&reference_events()).unwrap();
        let text = ReportEmitter::new(&a, &carriers()).render(ReportKind::GeneralStats).unwrap();
        assert_eq!(lines(&text), [
            "Number of carriers,1,",
            "Total tour duration,0.11 h,",
            "Total travel distance,1.00 km,",
            "Number of tours,1,",
            "Number of shipments,1,",
            "Number of services,0,",
            "Total MATSim Score,-120.5,",
            "Total jsprit Score,-56.0,",
        ]);
    }

    #[test]
    fn kilometres_and_hours_round_to_two_decimals() {
        let stats = GeneralStats {
            carriers:         CarrierSummary::default(),
            total_duration_s: 7200.0,
            total_distance_m: 12_346.0,
        };
        let text = render_general_stats(&stats).unwrap();
        assert!(text.contains("Total tour duration,2.00 h,\n"));
        assert!(text.contains("Total travel distance,12.35 km,\n"));
    }

    #[test]
    fn distance_tile_independent_of_link_order() {
        let cat = catalog();
        let mut b = LinkNetworkBuilder::new();
        b.add_link("x", 123.456).unwrap();
        b.add_link("y", 789.012).unwrap();
        b.add_link("z", 0.3).unwrap();
        let net = b.build();

        let render = |links: [&str; 3]| {
            let mut events = vec![tour_start(0.0, "t1", "v1")];
            events.extend(links.iter().enumerate().map(|(i, l)| link_enter(10.0 + i as f64, "v1", l)));
            events.push(tour_end(100.0, "t1", "v1"));
            let mut a = FreightAnalysis::new(&cat, &net);
            a.run(&events).unwrap();
            ReportEmitter::new(&a, &carriers()).render(ReportKind::GeneralStats).unwrap()
        };

        let forward = render(["x", "y", "z"]);
        let backward = render(["z", "y", "x"]);
        let shuffled = render(["y", "z", "x"]);
        assert_eq!(lines(&forward)[2], "Total travel distance,0.91 km,");
        assert_eq!(forward, backward);
        assert_eq!(forward, shuffled);
    }

    #[test]
    fn carrier_summary_tiles() {
        let (cat, net) = (catalog(), network());
        let a = FreightAnalysis::new(&cat, &net);
        let text = ReportEmitter::new(&a, &carriers()).render(ReportKind::CarrierSummary).unwrap();
        assert_eq!(lines(&text)[0], "Number of carriers,1,");
        assert_eq!(lines(&text)[5], "Total jsprit Score,-56.0,");
    }

    #[test]
    fn rendering_is_idempotent() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&reference_events()).unwrap();
        let emitter = ReportEmitter::new(&a, &carriers());
        for kind in ReportKind::ALL {
            assert_eq!(emitter.render(kind).unwrap(), emitter.render(kind).unwrap(), "{kind}");
        }
    }
}

// ── Emitter ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod emitter_tests {
    use fa_analysis::AnalysisError;
    use fa_core::{VehicleId, VehicleTypeCatalog};

    use super::*;
    use crate::{
        DirReportWriter, MemoryReportWriter, OutputError, OutputResult, ReportEmitter, ReportKind, ReportWriter,
        analyze_and_report,
    };

    #[test]
    fn writes_all_six_reports() {
        let (cat, net) = (catalog(), network());
        let mut w = MemoryReportWriter::new();
        let n = analyze_and_report(&reference_events(), &cat, &net, &carriers(), &mut w).unwrap();
        assert_eq!(n, 6);
        assert!(ReportKind::ALL.iter().all(|k| w.get(*k).is_some()));
    }

    #[test]
    fn missing_pickup_writes_nothing() {
        let (cat, net) = (catalog(), network());
        let mut w = MemoryReportWriter::new();
        let err = analyze_and_report(&[delivery(0.0, "v1", 1)], &cat, &net, &carriers(), &mut w).unwrap_err();
        assert!(matches!(err, OutputError::Analysis(AnalysisError::MissingPickup { .. })));
        assert!(w.reports.is_empty());
    }

    #[test]
    fn degenerate_load_summary_does_not_stop_other_reports() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&[tour_start(0.0, "t1", "v1"), tour_end(60.0, "t1", "v1")]).unwrap();

        let mut w = MemoryReportWriter::new();
        let err = ReportEmitter::new(&a, &carriers()).emit_all(&mut w).unwrap_err();
        let OutputError::Reports(failures) = err else { panic!("expected report failures") };
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].kind, ReportKind::LoadSummary);
        assert!(matches!(failures[0].error, OutputError::DegenerateAggregate(_)));
        assert_eq!(w.reports.len(), 5);
        assert_eq!(lines(w.get(ReportKind::LoadPerVehicle).unwrap()).len(), 1);
    }

    #[test]
    fn unresolved_vehicle_fails_only_load_reports() {
        let (cat, net) = (catalog(), network());
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&[pickup(0.0, "ghost", 2), delivery(5.0, "ghost", 2)]).unwrap();

        let mut w = MemoryReportWriter::new();
        let OutputError::Reports(failures) = ReportEmitter::new(&a, &carriers()).emit_all(&mut w).unwrap_err() else {
            panic!("expected report failures");
        };
        let kinds: Vec<_> = failures.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, [ReportKind::LoadPerVehicle, ReportKind::LoadSummary]);
        assert_eq!(w.reports.len(), 4);
    }

    /// Fails every write of one report kind and keeps the rest in memory.
    struct FailingWriter {
        fail:  ReportKind,
        inner: MemoryReportWriter,
    }

    impl ReportWriter for FailingWriter {
        fn write_report(&mut self, kind: ReportKind, contents: &str) -> OutputResult<()> {
            if kind == self.fail {
                return Err(std::io::Error::other("disk full").into());
            }
            self.inner.write_report(kind, contents)
        }
    }

    #[test]
    fn failed_write_does_not_stop_other_reports() {
        let (cat, net) = (catalog(), network());
        let mut w = FailingWriter { fail: ReportKind::LoadSummary, inner: MemoryReportWriter::new() };
        let err = analyze_and_report(&reference_events(), &cat, &net, &carriers(), &mut w).unwrap_err();

        let OutputError::Reports(failures) = err else { panic!("expected report failures") };
        let kinds: Vec<_> = failures.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, [ReportKind::LoadSummary]);
        assert!(matches!(failures[0].error, OutputError::Io(_)));
        assert_eq!(w.inner.reports.len(), 5);
        assert!(w.inner.get(ReportKind::LoadSummary).is_none());
        assert!(w.inner.get(ReportKind::CarrierSummary).is_some());
    }

    #[test]
    fn untyped_link_traffic_fails_only_per_type_report() {
        let (cat, net) = (catalog(), network());
        let mut events = reference_events();
        events.insert(3, link_enter(160.0, "ghost", "b"));
        let mut w = MemoryReportWriter::new();
        let err = analyze_and_report(&events, &cat, &net, &carriers(), &mut w).unwrap_err();

        let OutputError::Reports(failures) = err else { panic!("expected report failures") };
        let kinds: Vec<_> = failures.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, [ReportKind::TimeDistancePerVehicleType]);
        assert!(matches!(&failures[0].error, OutputError::UnresolvedVehicleType(v) if v.as_str() == "ghost"));
        assert_eq!(w.reports.len(), 5);
    }

    /// Resolves every vehicle to a type missing from its own listing.
    struct HiddenTypeCatalog {
        hidden: VehicleType,
    }

    impl VehicleTypeCatalog for HiddenTypeCatalog {
        fn vehicle_type_of(&self, _vehicle: &VehicleId) -> Option<&VehicleType> {
            Some(&self.hidden)
        }

        fn vehicle_types(&self) -> Box<dyn Iterator<Item = &VehicleType> + '_> {
            Box::new(std::iter::empty())
        }
    }

    #[test]
    fn per_type_report_includes_observed_types() {
        let cat = HiddenTypeCatalog { hidden: VehicleType::new("cargo_bike", 2.0, light_rates()) };
        let net = network();
        let mut a = FreightAnalysis::new(&cat, &net);
        a.run(&[tour_start(0.0, "t1", "v9"), tour_end(10.0, "t1", "v9")]).unwrap();

        let text = ReportEmitter::new(&a, &carriers()).render(ReportKind::TimeDistancePerVehicleType).unwrap();
        let l = lines(&text);
        assert_eq!(l.len(), 2);
        assert!(l[1].starts_with("cargo_bike;1;10.0;0.0;"));
    }

    #[test]
    fn dir_writer_creates_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("analysis");
        let (cat, net) = (catalog(), network());
        let mut w = DirReportWriter::new(&out).unwrap();
        analyze_and_report(&reference_events(), &cat, &net, &carriers(), &mut w).unwrap();

        for kind in ReportKind::ALL {
            assert!(out.join(kind.file_name()).is_file(), "{kind}");
        }
        let load = std::fs::read_to_string(w.path_of(ReportKind::LoadPerVehicle)).unwrap();
        assert!(load.ends_with("v1;light;10.0;5;5.0;[5, 0]\n"));
    }
}
