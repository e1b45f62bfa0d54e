use std::fs::File;
use std::io::BufWriter;

use ascent_sim::{orbital, presets, sim, Constants, SimError};

const OUTPUT_PATH: &str = "mission_data.csv";

fn main() -> Result<(), SimError> {
    let constants = Constants::kerbin();
    constants.validate()?;
    let mut vehicle = presets::soyuz(&constants);

    println!();
    println!("====================================================================");
    println!("  ASCENT SIMULATION — three-stage vehicle to {:.0} km circular orbit",
        constants.target_apoapsis / 1000.0);
    println!("====================================================================");
    println!();
    println!("  Vehicle");
    println!("  ──────────────────────────────────────────────────────────────────");
    for engine in &vehicle.engines {
        println!(
            "  {:<8} dry {:>8.0} kg   prop {:>8.0} kg   thrust {:>9.0}/{:>9.0} N   isp {:>3.0}/{:>3.0} s",
            engine.name,
            engine.dry_mass,
            engine.propellant_mass,
            engine.thrust_asl,
            engine.thrust_vac,
            engine.isp_asl,
            engine.isp_vac,
        );
    }
    println!(
        "  Payload  {:>8.0} kg   liftoff mass {:>8.0} kg",
        vehicle.payload_mass,
        vehicle.total_mass()
    );
    println!(
        "  Loop: {} steps at dt={} s ({:.0} s total), output to {}",
        constants.steps(),
        constants.dt,
        constants.total_time,
        OUTPUT_PATH
    );
    println!();

    let file = File::create(OUTPUT_PATH)?;
    let mut out = BufWriter::new(file);

    let result = sim::run(&mut vehicle, &constants, &mut out);

    // The output file is finalized on both paths; report whatever state the
    // run ended in.
    let orbit = orbital::apsides(&vehicle.pos, &vehicle.vel, &constants);
    println!();
    println!("  Result");
    println!("  ──────────────────────────────────────────────────────────────────");
    match &result {
        Ok(summary) => {
            println!(
                "  Completed {} steps, {} rows written",
                summary.steps, summary.rows_written
            );
        }
        Err(e) => {
            eprintln!("  RUN ABORTED: {e}");
            println!("  Partial output preserved in {OUTPUT_PATH}");
        }
    }
    println!(
        "  Final phase {}   t={:.1} s   alt={:.0} m",
        vehicle.phase,
        vehicle.time,
        vehicle.altitude(&constants)
    );
    println!(
        "  Apoapsis  {:>9.0} m   Periapsis {:>9.0} m",
        orbit.apoapsis, orbit.periapsis
    );
    println!(
        "  Mass      {:>9.0} kg  Stage {}   remaining propellant {:.0} kg",
        vehicle.total_mass(),
        vehicle.stage_idx,
        vehicle
            .active_engine()
            .map_or(0.0, |e| e.propellant_mass)
    );
    println!("====================================================================");
    println!();

    result.map(|_| ())
}
