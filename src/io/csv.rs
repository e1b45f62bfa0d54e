use std::io::{self, Write};

use crate::gnc::Phase;

// ---------------------------------------------------------------------------
// Output row schema (the contract the reporting collaborator reads)
// ---------------------------------------------------------------------------

/// One decimated telemetry sample.
///
/// Constructed only once every field is computed, written immediately, never
/// retained.
#[derive(Debug, Clone)]
pub struct SampleRow {
    pub time: f64,      // s
    pub altitude: f64,  // m
    pub apoapsis: f64,  // m
    pub periapsis: f64, // m
    pub speed: f64,     // surface-relative, m/s
    pub mass: f64,      // kg
    pub thrust: f64,    // N
    pub stage: usize,
    pub phase: Phase,
}

/// Columns: time, altitude, apoapsis, periapsis, speed, mass, thrust, stage, phase
pub fn write_header<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "time,altitude,apoapsis,periapsis,speed,mass,thrust,stage,phase")
}

/// Numeric fields carry fixed two-decimal precision; stage is a small
/// integer, phase its name.
pub fn write_row<W: Write>(w: &mut W, row: &SampleRow) -> io::Result<()> {
    writeln!(
        w,
        "{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{},{}",
        row.time,
        row.altitude,
        row.apoapsis,
        row.periapsis,
        row.speed,
        row.mass,
        row.thrust,
        row.stage,
        row.phase,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_rows_written() {
        let mut buf = Vec::new();
        write_header(&mut buf).unwrap();
        write_row(
            &mut buf,
            &SampleRow {
                time: 1.0,
                altitude: 123.456,
                apoapsis: 1_000.0,
                periapsis: -50.0,
                speed: 42.0,
                mass: 209_293.0,
                thrust: 2_800_000.0,
                stage: 0,
                phase: Phase::Ascent,
            },
        )
        .unwrap();

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "time,altitude,apoapsis,periapsis,speed,mass,thrust,stage,phase"
        );
        assert_eq!(
            lines[1],
            "1.00,123.46,1000.00,-50.00,42.00,209293.00,2800000.00,0,ASCENT"
        );
    }

    #[test]
    fn phase_names_match_schema() {
        for (phase, name) in [
            (Phase::Ascent, "ASCENT"),
            (Phase::GravityTurn, "GRAVITY_TURN"),
            (Phase::Coast, "COAST"),
            (Phase::Circularize, "CIRCULARIZE"),
            (Phase::Orbit, "ORBIT"),
        ] {
            assert_eq!(phase.to_string(), name);
        }
    }
}
