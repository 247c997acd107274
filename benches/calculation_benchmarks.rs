//! Performance benchmarks for the payroll engine.
//!
//! Covers the calculation functions directly and the `/calculate` endpoint:
//! - Single shift hours
//! - Aggregation over a fortnight of shifts
//! - Full payroll entry computation
//! - Batch of 100 requests through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::{
    DEFAULT_REGULAR_HOURS_PER_DAY, PayrollInput, PayrollSettings, aggregate_hours,
    compute_hours, compute_payroll_entry,
};
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{PayPeriod, ShiftInterval, WageConfig};

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

/// Creates `count` shifts over a fortnight, alternating day and overnight.
fn create_shifts(count: usize) -> Vec<ShiftInterval> {
    (0..count)
        .map(|i| {
            let date = NaiveDate::from_ymd_opt(2026, 3, 2 + (i % 14) as u32).unwrap();
            let (start, end) = if i % 2 == 0 {
                ("09:00", "17:30")
            } else {
                ("22:00", "07:00")
            };
            ShiftInterval {
                id: format!("shift_{:03}", i + 1),
                date,
                start_time: start.to_string(),
                end_time: Some(end.to_string()),
                break_start: None,
                break_end: None,
                approved: true,
            }
        })
        .collect()
}

fn create_input(shift_count: usize) -> PayrollInput {
    PayrollInput {
        employee_id: "emp_bench_001".to_string(),
        period: PayPeriod {
            start_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        },
        wage: WageConfig::hourly(Decimal::new(2250, 2)),
        shifts: create_shifts(shift_count),
        adjustments: vec![],
    }
}

fn create_request_body(employee_id: &str, shift_count: usize) -> String {
    let shifts: Vec<serde_json::Value> = create_shifts(shift_count)
        .iter()
        .map(|shift| {
            serde_json::json!({
                "id": shift.id,
                "date": shift.date,
                "start_time": shift.start_time,
                "end_time": shift.end_time
            })
        })
        .collect();

    serde_json::json!({
        "employee_id": employee_id,
        "period": {"start_date": "2026-03-02", "end_date": "2026-03-15"},
        "wage_group": "front_desk",
        "shifts": shifts
    })
    .to_string()
}

/// Benchmark: Hours for a single shift.
fn bench_compute_hours(c: &mut Criterion) {
    c.bench_function("compute_hours_overnight", |b| {
        b.iter(|| compute_hours(black_box("22:00"), black_box("06:30"), None, None))
    });
}

/// Benchmark: Aggregation across a fortnight.
fn bench_aggregate_hours(c: &mut Criterion) {
    let shifts = create_shifts(14);

    c.bench_function("aggregate_14_shifts", |b| {
        b.iter(|| aggregate_hours(black_box(&shifts), DEFAULT_REGULAR_HOURS_PER_DAY))
    });
}

/// Benchmark: Full payroll entry at various shift counts.
fn bench_payroll_entry_scaling(c: &mut Criterion) {
    let settings = PayrollSettings::default();
    let mut group = c.benchmark_group("payroll_entry");

    for shift_count in [1, 7, 14, 28].iter() {
        let input = create_input(*shift_count);

        group.throughput(Throughput::Elements(*shift_count as u64));
        group.bench_with_input(BenchmarkId::new("shifts", shift_count), &input, |b, input| {
            b.iter(|| compute_payroll_entry(black_box(input), &settings))
        });
    }

    group.finish();
}

/// Benchmark: One request through the router.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = create_request_body("emp_bench_001", 14);

    c.bench_function("request_14_shifts", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: Batch of 100 employees through the router.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100)
        .map(|i| create_request_body(&format!("emp_batch_{:03}", i), 1 + i % 14))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body.clone()))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compute_hours,
    bench_aggregate_hours,
    bench_payroll_entry_scaling,
    bench_single_request,
    bench_batch_100,
);
criterion_main!(benches);
