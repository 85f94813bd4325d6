//! Performance benchmarks for the transport roster engine.
//!
//! This benchmark suite tracks the cost of building a report as the
//! attendance selection grows:
//! - 10 attending employees
//! - 100 attending employees
//! - 1000 attending employees
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use transport_roster::models::{Employee, Route, RouteCost};
use transport_roster::report::build_report;
use transport_roster::store::MemoryStore;

/// Builds a roster with the given number of employees spread over 20
/// routes, each route carrying a cost and a three-station list.
fn create_store(employee_count: usize) -> MemoryStore {
    let mut store = MemoryStore::new();

    for route in 0..20 {
        let code = format!("R{:02}", route);
        store.insert_route(Route {
            route_code: code.clone(),
            route_name: format!("Line {}", route),
            vehicle_type: "Minibus".to_string(),
            contractor_name: "City Transit".to_string(),
            supervisor_name: "Nadia".to_string(),
            route_stations: format!("S{}A,S{}B,S{}C", route, route, route),
        });
        store
            .insert_route_cost(RouteCost {
                route_code: code,
                vehicle_capacity: 14,
                cost_5_days: Decimal::new(5000 + route as i64 * 100, 1),
                cost_4_days: Decimal::new(4200, 1),
                cost_3_days: Decimal::new(3300, 1),
            })
            .expect("route exists");
    }

    for i in 0..employee_count {
        let route = i % 20;
        store.insert_employee(Employee {
            name: format!("emp_{:04}", i),
            department: format!("dept_{}", i % 5),
            station: format!("S{}A", route),
            route_code: Some(format!("R{:02}", route)),
            notes: None,
        });
    }

    store
}

/// Builds the attendance selection for a roster of the given size.
fn create_selection(employee_count: usize) -> Vec<String> {
    (0..employee_count).map(|i| format!("emp_{:04}", i)).collect()
}

fn bench_build_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_report");

    for &size in &[10usize, 100, 1000] {
        let store = create_store(size);
        let selection = create_selection(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &selection,
            |b, selection| {
                b.iter(|| {
                    build_report(
                        black_box(&store),
                        black_box("2025-04-07"),
                        black_box(selection),
                    )
                    .expect("report build")
                });
            },
        );
    }

    group.finish();
}

fn bench_build_report_with_unresolved(c: &mut Criterion) {
    let store = create_store(100);
    // Half the selection is unknown names.
    let mut selection = create_selection(100);
    selection.extend((0..100).map(|i| format!("stranger_{:04}", i)));

    c.bench_function("build_report_with_unresolved", |b| {
        b.iter(|| {
            build_report(
                black_box(&store),
                black_box("2025-04-07"),
                black_box(&selection),
            )
            .expect("report build")
        });
    });
}

criterion_group!(benches, bench_build_report, bench_build_report_with_unresolved);
criterion_main!(benches);
