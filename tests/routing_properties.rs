use proptest::prelude::*;
use u_picking::models::{Batch, DepotPlacement, Order, Side, Warehouse, WarehouseConfig};
use u_picking::occupancy::AisleOccupancy;
use u_picking::policy::{compute_cost, evaluate_batches, RoutingPolicy, RoutingStrategy};

const EPS: f64 = 1e-9;

fn layout() -> impl Strategy<Value = Warehouse> {
    (
        1usize..8,
        1.0f64..30.0,
        0.0f64..3.0,
        0.5f64..4.0,
        prop_oneof![Just(DepotPlacement::Corner), Just(DepotPlacement::Center)],
    )
        .prop_map(|(aisles, length, shelf, aisle, depot)| {
            Warehouse::new(aisles, length, shelf, aisle)
                .expect("generated dimensions are valid")
                .with_depot(depot)
        })
}

/// Items as (aisle, fraction of shelf length).
fn items() -> impl Strategy<Value = Vec<(usize, f64)>> {
    prop::collection::vec((0usize..8, 0.0f64..=1.0), 1..12)
}

fn batch(warehouse: &Warehouse, items: &[(usize, f64)]) -> Batch {
    let products = items
        .iter()
        .enumerate()
        .map(|(i, &(aisle, fraction))| {
            let aisle = aisle % warehouse.number_of_aisles();
            let height = fraction * warehouse.shelf_length();
            warehouse
                .product(i, aisle, Side::Left, height, 1.0)
                .expect("inside the layout")
        })
        .collect();
    let mut batch = Batch::new(f64::MAX);
    batch
        .add_order(Order::new(0, 0.0, 0.0, products))
        .expect("unbounded capacity");
    batch
}

/// Layouts with a slower or faster picker and non-zero handling and turn
/// times.
fn timed_layout() -> impl Strategy<Value = Warehouse> {
    (
        layout(),
        0.2f64..5.0,
        0.0f64..5.0,
        0.0f64..20.0,
        0.0f64..100.0,
        0.0f64..30.0,
    )
        .prop_map(|(w, speed, picking, outside, inside, depot)| {
            WarehouseConfig {
                travel_speed: speed,
                picking_time_per_item: picking,
                outside_turn_time: outside,
                inside_turn_time: inside,
                depot_time: depot,
                ..WarehouseConfig::from(&w)
            }
            .build()
            .expect("generated times are valid")
        })
}

fn distance(policy: RoutingPolicy, warehouse: &Warehouse, batch: &Batch) -> f64 {
    policy.distance(warehouse, batch)
}

proptest! {
    #[test]
    fn distances_are_non_negative(w in layout(), items in items()) {
        let b = batch(&w, &items);
        for policy in RoutingPolicy::ALL {
            let d = distance(policy, &w, &b);
            prop_assert!(d.is_finite());
            prop_assert!(d >= 0.0);
        }
    }

    #[test]
    fn exact_is_a_lower_bound(w in layout(), items in items()) {
        let b = batch(&w, &items);
        let exact = distance(RoutingPolicy::RatliffRosenthal, &w, &b);
        let plus = distance(RoutingPolicy::CombinedPlus, &w, &b);
        let combined = distance(RoutingPolicy::Combined, &w, &b);
        let s_shape = distance(RoutingPolicy::SShape, &w, &b);
        let largest_gap = distance(RoutingPolicy::LargestGap, &w, &b);

        prop_assert!(exact <= plus + EPS, "exact {} > combined-plus {}", exact, plus);
        prop_assert!(plus <= combined + EPS, "combined-plus {} > combined {}", plus, combined);
        prop_assert!(combined <= s_shape + EPS, "combined {} > s-shape {}", combined, s_shape);
        prop_assert!(
            combined <= largest_gap + EPS,
            "combined {} > largest gap {}",
            combined,
            largest_gap
        );
    }

    #[test]
    fn adding_an_item_never_shortens_the_tour(
        w in layout(),
        items in items(),
        extra in (0usize..8, 0.0f64..=1.0),
    ) {
        let before = batch(&w, &items);
        let mut more = items.clone();
        more.push(extra);
        let after = batch(&w, &more);
        for policy in RoutingPolicy::ALL {
            let d0 = distance(policy, &w, &before);
            let d1 = distance(policy, &w, &after);
            prop_assert!(d0 <= d1 + EPS, "{}: {} -> {}", policy, d0, d1);
        }
    }

    #[test]
    fn exact_is_a_lower_bound_in_service_time(w in timed_layout(), items in items()) {
        let b = batch(&w, &items);
        let exact = compute_cost(RoutingPolicy::RatliffRosenthal, &w, &b);
        for policy in RoutingPolicy::ALL {
            let cost = compute_cost(policy, &w, &b);
            prop_assert!(exact <= cost + 1e-7, "exact {} > {} {}", exact, policy, cost);
        }
    }

    #[test]
    fn adding_an_item_never_speeds_up_the_exact_tour(
        w in timed_layout(),
        items in items(),
        extra in (0usize..8, 0.0f64..=1.0),
    ) {
        let before = batch(&w, &items);
        let mut more = items.clone();
        more.push(extra);
        let after = batch(&w, &more);
        let t0 = compute_cost(RoutingPolicy::RatliffRosenthal, &w, &before);
        let t1 = compute_cost(RoutingPolicy::RatliffRosenthal, &w, &after);
        prop_assert!(t0 <= t1 + 1e-7, "{} -> {}", t0, t1);
    }

    #[test]
    fn adding_an_item_never_lowers_the_cost_without_turns(
        w in layout(),
        speed in 0.2f64..5.0,
        picking in 0.0f64..5.0,
        items in items(),
        extra in (0usize..8, 0.0f64..=1.0),
    ) {
        let w = WarehouseConfig {
            travel_speed: speed,
            picking_time_per_item: picking,
            depot_time: 10.0,
            ..WarehouseConfig::from(&w)
        }
        .build()
        .expect("valid");
        let before = batch(&w, &items);
        let mut more = items.clone();
        more.push(extra);
        let after = batch(&w, &more);
        for policy in RoutingPolicy::ALL {
            let t0 = compute_cost(policy, &w, &before);
            let t1 = compute_cost(policy, &w, &after);
            prop_assert!(t0 <= t1 + 1e-7, "{}: {} -> {}", policy, t0, t1);
        }
    }

    #[test]
    fn routing_is_deterministic(w in layout(), items in items()) {
        let b = batch(&w, &items);
        for policy in RoutingPolicy::ALL {
            prop_assert_eq!(policy.route(&w, &b), policy.route(&w, &b));
        }
    }

    #[test]
    fn plans_explain_their_distance(w in layout(), items in items()) {
        let b = batch(&w, &items);
        let occupied: Vec<usize> = AisleOccupancy::from_batch(&w, &b)
            .occupied()
            .map(|(aisle, _)| aisle)
            .collect();
        for policy in RoutingPolicy::ALL {
            let plan = policy.route(&w, &b);
            let in_aisles: f64 = plan.decisions().iter().map(|d| d.visit.distance(&w)).sum();
            prop_assert!((plan.distance() - plan.cross_aisle() - in_aisles).abs() < EPS);
            prop_assert_eq!(plan.item_count(), items.len());
            for &aisle in &occupied {
                prop_assert!(plan.decision(aisle).is_some(), "{} skips aisle {}", policy, aisle);
            }
        }
    }

    #[test]
    fn single_aisle_policies_agree(
        length in 1.0f64..30.0,
        aisle_width in 0.5f64..4.0,
        fraction in 0.0f64..=1.0,
    ) {
        let w = Warehouse::new(1, length, 1.0, aisle_width).expect("valid");
        let height = fraction * length;
        let b = batch(&w, &[(0, fraction)]);
        for policy in RoutingPolicy::ALL {
            let d = distance(policy, &w, &b);
            prop_assert!((d - (aisle_width + 2.0 * height)).abs() < 1e-7, "{}: {}", policy, d);
        }
    }

    #[test]
    fn one_occupied_aisle_policies_agree(
        aisles in 1usize..8,
        aisle in 0usize..8,
        depot in prop_oneof![Just(DepotPlacement::Corner), Just(DepotPlacement::Center)],
        fractions in prop::collection::vec(0.0f64..=1.0, 1..=4),
    ) {
        let w = Warehouse::new(aisles, 10.0, 1.0, 2.0)
            .expect("valid")
            .with_depot(depot);
        let aisle = aisle % aisles;
        let items: Vec<(usize, f64)> = fractions.iter().map(|&f| (aisle, f)).collect();
        let b = batch(&w, &items);
        let exact = distance(RoutingPolicy::RatliffRosenthal, &w, &b);
        for policy in RoutingPolicy::ALL {
            let d = distance(policy, &w, &b);
            prop_assert!((d - exact).abs() < 1e-7, "{}: {} vs exact {}", policy, d, exact);
        }
    }

    #[test]
    fn parallel_evaluation_matches_sequential(
        w in layout(),
        groups in prop::collection::vec(items(), 0..6),
    ) {
        let batches: Vec<Batch> = groups.iter().map(|items| batch(&w, items)).collect();
        for policy in RoutingPolicy::ALL {
            let parallel = evaluate_batches(&policy, &w, &batches);
            let sequential: Vec<f64> = batches
                .iter()
                .map(|b| compute_cost(policy, &w, b))
                .collect();
            prop_assert_eq!(parallel, sequential);
        }
    }
}

#[test]
fn empty_batch_costs_nothing() {
    let w = Warehouse::new(5, 10.0, 1.0, 2.0).expect("valid");
    let empty = Batch::new(10.0);
    for policy in RoutingPolicy::ALL {
        assert_eq!(compute_cost(policy, &w, &empty), 0.0);
        assert!(policy.route(&w, &empty).decisions().is_empty());
    }
}

#[test]
fn reference_layout() {
    let w = Warehouse::new(3, 10.0, 1.0, 2.0).expect("valid");
    let b = batch(&w, &[(0, 0.3), (1, 0.8), (2, 0.2)]);
    for policy in RoutingPolicy::ALL {
        assert!(
            (distance(policy, &w, &b) - 42.0).abs() < 1e-10,
            "{policy} gives {}",
            distance(policy, &w, &b)
        );
    }
}

#[test]
fn growing_an_order_in_a_batch() {
    let w = Warehouse::new(4, 10.0, 1.0, 2.0).expect("valid");
    let mut order = Order::new(1, 0.0, 0.0, vec![]);
    let mut last = 0.0;
    for (id, &(aisle, height)) in [(1, 3.0), (3, 8.0), (1, 6.0), (2, 9.5)].iter().enumerate() {
        order.push_product(w.product(id, aisle, Side::Right, height, 2.0).expect("valid"));
        let mut b = Batch::new(10.0);
        b.add_order(order.clone()).expect("fits");
        assert!((b.weight() - 2.0 * order.len() as f64).abs() < 1e-10);
        for policy in RoutingPolicy::ALL {
            assert_eq!(policy.route(&w, &b).item_count(), order.len());
        }
        let cost = compute_cost(RoutingPolicy::RatliffRosenthal, &w, &b);
        assert!(cost >= last - 1e-9, "{last} -> {cost}");
        last = cost;
    }

    let mut full = Batch::new(6.0);
    assert!(full.add_order(order).is_err());
}

#[test]
fn service_time_with_handling() {
    let w = WarehouseConfig {
        number_of_aisles: 3,
        travel_speed: 2.0,
        picking_time_per_item: 4.0,
        outside_turn_time: 1.0,
        inside_turn_time: 0.5,
        depot_time: 10.0,
        ..WarehouseConfig::default()
    }
    .build()
    .expect("valid");
    let b = batch(&w, &[(0, 0.3), (1, 0.8), (2, 0.2)]);
    // Traverse, Traverse, FromFront { 2 }: 6 outside turns, 1 inside turn
    let expected = 42.0 / 2.0 + 3.0 * 4.0 + 6.0 * 1.0 + 1.0 * 0.5 + 10.0;
    let cost = compute_cost(RoutingPolicy::SShape, &w, &b);
    assert!((cost - expected).abs() < 1e-10);
}
