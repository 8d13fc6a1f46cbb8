use heavy_perf_core::{
    AntiIce, AutobrakeMode, CalcError, LandingFlap, LandingInputs, LineupAngle, PerfCalculator,
    RunwayCondition, TakeoffConfig, TakeoffInputs, TakeoffResult,
};

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Heavy Widebody Performance Demo ===\n");
    let calc = PerfCalculator::new();

    // A benign sea-level departure.
    let mut inputs = TakeoffInputs {
        tow_kg: 380_000.0,
        forward_cg: false,
        config: TakeoffConfig::Conf2,
        tora_m: 3500.0,
        slope_pct: 0.0,
        lineup: LineupAngle::Turn90,
        wind_kt: 10.0,
        elevation_ft: 0.0,
        qnh_hpa: 1013.25,
        oat_c: 15.0,
        anti_ice: AntiIce::Off,
        packs: true,
        force_toga: false,
        runway_condition: RunwayCondition::Dry,
        cg_percent_mac: Some(32.0),
    };
    println!("-- Sea level, 3500 m, ISA, 10 kt headwind, 380 t --");
    print_takeoff(&calc.calculate(&inputs));

    // Hot and high.
    inputs.elevation_ft = 6000.0;
    inputs.oat_c = 32.0;
    inputs.tora_m = 4000.0;
    println!("\n-- 6000 ft elevation, 32 C, 4000 m runway --");
    print_takeoff(&calc.calculate(&inputs));

    // Wet runway, optimal configuration sweep.
    inputs.elevation_ft = 0.0;
    inputs.oat_c = 24.0;
    inputs.tora_m = 3200.0;
    inputs.tow_kg = 410_000.0;
    inputs.runway_condition = RunwayCondition::Wet;
    println!("\n-- Wet runway, 410 t, best configuration --");
    let best = calc.calculate_optimal_configuration(&inputs);
    println!("chosen configuration: {:?}", best.inputs.config);
    print_takeoff(&best);

    // Landing distances.
    let landing = LandingInputs {
        weight_kg: 360_000.0,
        flap: LandingFlap::Full,
        condition: RunwayCondition::Wet,
        wind_speed_kt: 12.0,
        wind_direction_deg: 160.0,
        runway_heading_deg: 0.0,
        elevation_ft: 0.0,
        qnh_hpa: 1013.25,
        oat_c: 22.0,
        slope_pct: -0.8,
        reverse_thrust: true,
        autoland: false,
        approach_speed_kt: None,
    };
    println!("\n-- Landing, 360 t, wet runway, quartering tailwind --");
    let d = calc.calculate_landing_distances(&landing);
    println!("target approach speed: {:.0} kt", d.target_approach_speed_kt);
    println!("Autobrake | Required distance");
    println!("----------|------------------");
    for (mode, dist) in [
        (AutobrakeMode::Max, d.max_autobrake_m),
        (AutobrakeMode::Medium, d.medium_autobrake_m),
        (AutobrakeMode::Low, d.low_autobrake_m),
    ] {
        println!("{mode:>9?} | {dist:>7.0} m");
    }

    // Crosswind advisories.
    println!("\n-- Crosswind limits --");
    for condition in [
        RunwayCondition::Dry,
        RunwayCondition::CompactedSnow,
        RunwayCondition::Slush13mm,
    ] {
        println!(
            "{condition:?}: {:.0} kt (at -20 C: {:.0} kt)",
            calc.crosswind_limit_kt(condition, 10.0),
            calc.crosswind_limit_kt(condition, -20.0),
        );
    }
}

fn print_takeoff(result: &TakeoffResult) {
    if result.error != CalcError::None {
        println!("rejected: {:?} (mtow {:.0} kg)", result.error, result.mtow_kg);
        return;
    }
    println!(
        "MTOW {:.0} kg, limited by {:?}",
        result.mtow_kg, result.oat_limiting_factor
    );
    match (result.flex_temp_c, result.flex_limiting_factor) {
        (Some(flex), Some(factor)) => println!("flex {flex} C (capped by {factor:?})"),
        _ => println!("no flex available"),
    }
    println!(
        "V1 {} / Vr {} / V2 {} kt",
        result.speeds.v1_kt, result.speeds.vr_kt, result.speeds.v2_kt
    );
    if let Some(trim) = result.stab_trim {
        println!("stab trim {trim:.1} units");
    }
}
