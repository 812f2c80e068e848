//! Tests for runway performance derating

use pretty_assertions::assert_eq;
use vixxen_core::performance::{derate, PerformanceInputs, SurfaceType};

fn labels(factors: &[vixxen_core::performance::AppliedFactor]) -> Vec<String> {
    factors.iter().map(|f| f.label.clone()).collect()
}

#[test]
fn test_takeoff_factor_order() {
    let result = derate(&PerformanceInputs {
        temp_above_isa_c: 12.0,
        elevation_increase_ft: 2500.0,
        tailwind_kts: 5.0,
        runway_slope_percent: 1.0,
        surface_type: SurfaceType::DryGrass,
        ..Default::default()
    });

    assert_eq!(
        labels(&result.applied_takeoff_factors),
        vec![
            "Base Safety Factor",
            "Temperature +12°C above ISA",
            "Elevation +2500ft",
            "Tailwind 5kts",
            "Uphill slope 1%",
            "Dry Grass (up to 20cm)",
        ]
    );

    let factors: Vec<f64> = result.applied_takeoff_factors.iter().map(|f| f.factor).collect();
    let expected = [1.15, 1.21, 1.331, 1.2, 1.1, 1.2];
    for (actual, expected) in factors.iter().zip(expected) {
        assert!((actual - expected).abs() < 1e-9, "{actual} vs {expected}");
    }
    let product: f64 = expected.iter().product();
    assert!((result.takeoff_factor - product).abs() < 1e-9);
}

#[test]
fn test_one_degree_counts_as_full_increment() {
    let result = derate(&PerformanceInputs {
        temp_above_isa_c: 1.0,
        ..Default::default()
    });
    assert!((result.takeoff_factor - 1.15 * 1.1).abs() < 1e-9);
    assert!((result.landing_factor - 1.15 * 1.05).abs() < 1e-9);
}

#[test]
fn test_tailwind_uses_different_reference_speeds() {
    // 13 kts is 20% of 65 kts liftoff but only 16.25% of 80 kts touchdown
    let result = derate(&PerformanceInputs {
        tailwind_kts: 13.0,
        ..Default::default()
    });
    assert!((result.applied_takeoff_factors[1].factor - 1.44).abs() < 1e-9);
    assert!((result.applied_landing_factors[1].factor - 1.44).abs() < 1e-9);

    let result = derate(&PerformanceInputs {
        tailwind_kts: 14.0,
        ..Default::default()
    });
    // 21.5% -> 3 steps, 17.5% -> 2 steps
    assert!((result.applied_takeoff_factors[1].factor - 1.728).abs() < 1e-9);
    assert!((result.applied_landing_factors[1].factor - 1.44).abs() < 1e-9);
}

#[test]
fn test_monotonic_in_environment() {
    let mut previous = derate(&PerformanceInputs::default());
    for step in 1..=40 {
        let x = f64::from(step) * 2.5;
        let current = derate(&PerformanceInputs {
            temp_above_isa_c: x,
            elevation_increase_ft: x * 100.0,
            tailwind_kts: x / 4.0,
            ..Default::default()
        });
        assert!(current.takeoff_factor >= previous.takeoff_factor);
        assert!(current.landing_factor >= previous.landing_factor);
        previous = current;
    }
}

#[test]
fn test_each_surface_applies_at_most_once() {
    for surface in SurfaceType::ALL {
        let result = derate(&PerformanceInputs {
            surface_type: surface,
            ..Default::default()
        });
        let label = surface.label();
        let takeoff_hits = result.applied_takeoff_factors.iter().filter(|f| f.label == label).count();
        let landing_hits = result.applied_landing_factors.iter().filter(|f| f.label == label).count();

        assert_eq!(takeoff_hits, usize::from(surface.takeoff_factor().is_some()));
        assert_eq!(landing_hits, usize::from(surface.landing_factor().is_some()));
        assert!(result.applied_takeoff_factors.len() <= 2);
        assert!(result.applied_landing_factors.len() <= 2);
    }
}

#[test]
fn test_surface_penalties() {
    let expect = |surface, takeoff: f64, landing: f64| {
        let result = derate(&PerformanceInputs {
            surface_type: surface,
            ..Default::default()
        });
        assert!((result.takeoff_factor - 1.15 * takeoff).abs() < 1e-9, "{surface:?}");
        assert!((result.landing_factor - 1.15 * landing).abs() < 1e-9, "{surface:?}");
    };

    expect(SurfaceType::SealedDry, 1.0, 1.0);
    expect(SurfaceType::WetSealed, 1.0, 1.15);
    expect(SurfaceType::DryGrass, 1.2, 1.2);
    expect(SurfaceType::WetGrass, 1.3, 1.3);
    expect(SurfaceType::DenseGrass, 1.0, 1.6);
    expect(SurfaceType::SoftSnow, 1.25, 1.0);
    expect(SurfaceType::MuddySnow, 1.0, 1.25);
    expect(SurfaceType::StandingWater, 1.0, 1.5);
}

#[test]
fn test_threshold_addition_not_scaled() {
    let base = PerformanceInputs {
        surface_type: SurfaceType::StandingWater,
        no_continuous_max_braking: true,
        ..Default::default()
    };
    let without = derate(&base);
    let with = derate(&PerformanceInputs {
        threshold_height_excess_ft: 25.0,
        ..base
    });

    assert_eq!(with.landing_factor, without.landing_factor);
    assert_eq!(with.threshold_addition, 183.0);
    assert!(
        (with.required_landing_distance - (without.required_landing_distance + 183.0)).abs()
            < 1e-9
    );
    assert_eq!(with.required_takeoff_distance, without.required_takeoff_distance);
}

#[test]
fn test_approach_speed_and_braking() {
    let result = derate(&PerformanceInputs {
        approach_speed_excess_kts: 15.0,
        no_continuous_max_braking: true,
        ..Default::default()
    });
    // 1.15 * 1.2^2 * 1.2
    assert!((result.landing_factor - 1.98720).abs() < 1e-9);
    assert_eq!(result.takeoff_factor, 1.15);
    assert_eq!(result.landing_distance_rounded(), (404.0 * result.landing_factor).ceil());
}

#[test]
fn test_surface_type_serializes_as_form_value() {
    let json = serde_json::to_string(&SurfaceType::StandingWater).unwrap();
    assert_eq!(json, "\"standing-water\"");
    let parsed: SurfaceType = serde_json::from_str("\"sealed-dry\"").unwrap();
    assert_eq!(parsed, SurfaceType::SealedDry);
}

#[test]
fn test_idempotent() {
    let inputs = PerformanceInputs {
        temp_above_isa_c: 17.0,
        tailwind_kts: 3.0,
        runway_slope_percent: -2.5,
        surface_type: SurfaceType::MuddySnow,
        threshold_height_excess_ft: 4.0,
        ..Default::default()
    };
    assert_eq!(derate(&inputs), derate(&inputs));
}
