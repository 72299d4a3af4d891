use amm_engine_rs::prelude::*;
use proptest::prelude::*;

fn price_strategy() -> impl Strategy<Value = f64> {
    0.0001f64..1_000_000.0
}

fn drag_strategy() -> impl Strategy<Value = (bool, f64)> {
    (
        any::<bool>(),
        prop_oneof![
            8 => 0.0001f64..1_000_000.0,
            1 => Just(f64::NAN),
            1 => Just(f64::INFINITY),
            1 => Just(-1.0),
            1 => Just(0.0),
        ],
    )
}

proptest! {
    #[test]
    fn range_bounds_never_cross(
        current in price_strategy(),
        width in 0.5f64..90.0,
        drags in prop::collection::vec(drag_strategy(), 1..40),
    ) {
        let model = RangeModel::default();
        let mut range = PriceRange::around(PricePoint::new(current).unwrap(), width).unwrap();

        for (is_lower, proposed) in drags {
            let window = model.compute_axis_window(&[], &range);
            range = if is_lower {
                model.update_lower_bound(proposed, &range, &window)
            } else {
                model.update_upper_bound(proposed, &range, &window)
            };
            prop_assert!(range.lower() < range.upper());
            prop_assert!(range.lower().value().is_finite());
            prop_assert!(range.upper().value().is_finite());
        }
    }

    #[test]
    fn step_buttons_never_cross(
        lower in 1.0f64..1000.0,
        ratio in 1.001f64..3.0,
        steps in prop::collection::vec((any::<bool>(), any::<bool>()), 1..60),
    ) {
        let model = RangeModel::default();
        let mut range = PriceRange::from_values(lower, lower * ratio).unwrap();

        for (is_lower, up) in steps {
            let window = model.compute_axis_window(&[], &range);
            let direction = if up { StepDirection::Up } else { StepDirection::Down };
            range = if is_lower {
                model.step_lower_bound(&range, direction, &window)
            } else {
                model.step_upper_bound(&range, direction, &window)
            };
            prop_assert!(range.lower() < range.upper());
        }
    }

    #[test]
    fn axis_round_trip(lo in 1.0f64..10_000.0, width in 0.01f64..10_000.0, t in 0.0f64..=1.0) {
        let hi = lo + width;
        let window = AxisWindow::from_values(lo, hi).unwrap();
        let price = lo + t * width;

        let coordinate = map_price_to_axis(price, &window);
        prop_assert!((0.0..=100.0).contains(&coordinate));

        let back = map_axis_to_price(coordinate, &window).value();
        prop_assert!((back - price).abs() <= 1e-9 * hi.max(1.0));
    }

    #[test]
    fn axis_coordinate_always_in_bounds(price in any::<f64>()) {
        let window = AxisWindow::from_values(100.0, 200.0).unwrap();
        let coordinate = map_price_to_axis(price, &window);
        prop_assert!((0.0..=100.0).contains(&coordinate));
    }

    #[test]
    fn min_received_never_exceeds_amount_out(
        amount in 0.001f64..1_000_000.0,
        price_in in 0.001f64..100_000.0,
        price_out in 0.001f64..100_000.0,
        depth in 1.0f64..1e9,
        slippage in 0.0f64..=100.0,
    ) {
        let quote = QuoteEngine::default().compute_quote(amount, price_in, price_out, depth, depth, slippage);
        prop_assert!(quote.min_received <= quote.amount_out);
        prop_assert!((0.0..=100.0).contains(&quote.price_impact_pct));
        if slippage == 0.0 {
            prop_assert_eq!(quote.min_received, quote.amount_out);
        }
    }

    #[test]
    fn quote_never_returns_non_finite(
        amount in any::<f64>(),
        price_in in any::<f64>(),
        price_out in any::<f64>(),
        slippage in any::<f64>(),
    ) {
        let quote = QuoteEngine::default().compute_quote(amount, price_in, price_out, 1000.0, 1000.0, slippage);
        prop_assert!(quote.rate.is_finite());
        prop_assert!(quote.amount_out.is_finite());
        prop_assert!(quote.min_received.is_finite());
        prop_assert!(quote.price_impact_pct.is_finite());
    }

    #[test]
    fn cumulative_liquidity_is_monotone(
        entries in prop::collection::vec((1.0f64..200.0, -5.0f64..50.0), 0..80),
    ) {
        let samples: Vec<LiquiditySample> = entries
            .into_iter()
            .map(|(p, liquidity)| LiquiditySample::new(PricePoint::new(p).unwrap(), liquidity))
            .collect();
        let book = build_book(&samples, PricePoint::new(100.0).unwrap());

        for side in [&book.bids, &book.asks] {
            for pair in side.windows(2) {
                prop_assert!(pair[0].cumulative_liquidity <= pair[1].cumulative_liquidity);
            }
            for level in side.iter() {
                prop_assert!(level.liquidity > 0.0);
            }
        }
        for bid in &book.bids {
            prop_assert!(bid.price.value() <= 100.0);
        }
        for ask in &book.asks {
            prop_assert!(ask.price.value() > 100.0);
        }
        prop_assert_eq!(book.spread_pct.is_some(), !book.bids.is_empty() && !book.asks.is_empty());
    }

    #[test]
    fn limit_depth_preserves_prefix(
        entries in prop::collection::vec((1.0f64..200.0, 0.1f64..50.0), 0..60),
        max_levels in 0usize..30,
    ) {
        let samples: Vec<LiquiditySample> = entries
            .into_iter()
            .map(|(p, liquidity)| LiquiditySample::new(PricePoint::new(p).unwrap(), liquidity))
            .collect();
        let book = build_book(&samples, PricePoint::new(100.0).unwrap());
        let limited = limit_depth(&book, max_levels);

        prop_assert!(limited.bids.len() <= max_levels);
        prop_assert!(limited.asks.len() <= max_levels);
        prop_assert_eq!(&limited.bids[..], &book.bids[..limited.bids.len()]);
        prop_assert_eq!(&limited.asks[..], &book.asks[..limited.asks.len()]);
    }
}

#[test]
fn reference_swap_scenario() {
    let quote = QuoteEngine::default().compute_quote(1.0, 2450.0, 1.0, 2500.0, 2_450_000.0, 0.5);
    assert_eq!(quote.rate, 2450.0);
    assert_eq!(quote.amount_out, 2450.0);
    assert!((quote.min_received - 2450.0 * 0.995).abs() < 1e-9);
}

#[test]
fn reference_drag_scenario() {
    let range = PriceRange::around(PricePoint::new(2450.0).unwrap(), 10.0).unwrap();
    let window = compute_axis_window(&[], &range);
    let next = amm_engine_rs::range::update_lower_bound(2700.0, &range, &window);
    assert_eq!(next, range);
}

#[test]
fn empty_book_scenario() {
    let book = build_book(&[], PricePoint::new(1.0).unwrap());
    assert!(book.bids.is_empty());
    assert!(book.asks.is_empty());
    assert_eq!(book.spread_pct, None);
}
