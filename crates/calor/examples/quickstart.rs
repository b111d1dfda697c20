//! Calor quickstart: sample one curve per bar configuration.
//!
//! Demonstrates:
//!   1. Building parameter snapshots (builder and string keys)
//!   2. Sampling the infinite and finite bars over time
//!   3. Reading the reference overlays and metrics from a frame
//!   4. Inspecting the Fourier expansion of a finite bar
//!
//! Run with:
//!   cargo run --example quickstart

use calor::prelude::*;

const POINTS: usize = 11;
const TIMES: [f64; 4] = [0.0, 0.5, 2.0, 10.0];

fn print_curve(label: &str, curve: &[SpatialSample]) {
    let values: Vec<String> = curve.iter().map(|s| format!("{:6.3}", s.u)).collect();
    println!("  {label:>8}: {}", values.join(" "));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sampler = SolutionSampler::default();

    // ─── Infinite bar ───────────────────────────────────────────
    let infinite = SimulationParameters::builder()
        .bar_type(BarType::Infinite)
        .initial_condition(InitialCondition::Step)
        .build()?;

    println!("infinite bar, step profile, α = {}", infinite.diffusivity);
    for t in TIMES {
        let frame = sampler.sample_frame(t, POINTS, &infinite)?;
        print_curve(&format!("t={t}"), &frame.solution);
        if let Some(kernel) = &frame.kernel {
            print_curve("kernel", kernel);
        }
    }

    // ─── Finite bar, keys from a UI layer ───────────────────────
    for key in ["dirichlet", "neumann", "mixed"] {
        let params = SimulationParameters {
            bar_type: "finite".parse()?,
            initial_condition: "two-peaks".parse()?,
            boundary_condition: key.parse()?,
            ..Default::default()
        };
        println!("\nfinite bar, two peaks, {key}");
        for t in TIMES {
            let frame = sampler.sample_frame(t, POINTS, &params)?;
            print_curve(&format!("t={t}"), &frame.solution);
            if t == TIMES[TIMES.len() - 1] {
                println!(
                    "  solved {} points in {} us ({} quadrature nodes)",
                    frame.metrics.points, frame.metrics.solve_us, frame.metrics.quadrature_nodes
                );
            }
        }

        let series = FiniteBarSolver::default().series(&params)?;
        let leading: Vec<String> = series
            .coefficients()
            .iter()
            .take(4)
            .map(|c| format!("c{}={:.4}", c.n, c.value))
            .collect();
        match series.constant_mode() {
            Some(a0) => println!("  A0={a0:.4} {}", leading.join(" ")),
            None => println!("  {}", leading.join(" ")),
        }
    }

    Ok(())
}
