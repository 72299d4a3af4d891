//! Range Drag Example
//!
//! This example walks a liquidity price range through a series of drag and
//! step-button events:
//! - Seeding the range at the current price ± 10%
//! - Mapping bounds to chart axis coordinates
//! - Rejected drags that would cross the opposite bound
//!
//! Run with: `RUST_LOG=debug cargo run --example range_drag`

use amm_engine_rs::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).init();

    println!("=== Range Drag Example ===\n");

    let current = PricePoint::new(2450.0).expect("Valid price");
    let model = RangeModel::default();
    let mut range = model.seed_range(current).expect("Valid range");
    let candles = [2310.0, 2380.0, 2475.0, 2520.0, 2490.0, 2415.0];

    print_range("Seeded", &range, current, &model, &candles);

    let drags: [(&str, f64); 5] = [
        ("lower -> 2300", 2300.0),
        ("lower -> 2700 (crosses upper)", 2700.0),
        ("upper -> 2600", 2600.0),
        ("upper -> 2310 (inside gap)", 2310.0),
        ("upper -> 9000 (past chart edge)", 9000.0),
    ];

    for (label, proposed) in drags {
        let window = model.compute_axis_window(&candles, &range);
        range = if label.starts_with("lower") {
            model.update_lower_bound(proposed, &range, &window)
        } else {
            model.update_upper_bound(proposed, &range, &window)
        };
        print_range(label, &range, current, &model, &candles);
    }

    let window = model.compute_axis_window(&candles, &range);
    range = model.step_lower_bound(&range, StepDirection::Down, &window);
    print_range("step lower down", &range, current, &model, &candles);
}

fn print_range(
    label: &str,
    range: &PriceRange,
    current: PricePoint,
    model: &RangeModel,
    candles: &[f64],
) {
    let window = model.compute_axis_window(candles, range);
    println!("{label}:");
    println!(
        "  Lower: {:.2} ({}) at axis {:.1}",
        range.lower().value(),
        percent_from_current(range.lower(), current),
        map_price_to_axis(range.lower().value(), &window)
    );
    println!(
        "  Upper: {:.2} ({}) at axis {:.1}",
        range.upper().value(),
        percent_from_current(range.upper(), current),
        map_price_to_axis(range.upper().value(), &window)
    );
    println!(
        "  Window: {:.2} .. {:.2}, in range: {}\n",
        window.min().value(),
        window.max().value(),
        range.contains(current)
    );
}
