//! Driver: samples the Maxwell speed distribution at a prompted
//! temperature and reports the weighted mean under all six summation
//! strategies, for signed and absolute speeds, against the analytic result.

use std::io::{self, Write};

use anyhow::{Context, Result};

use maxwell_mean::maxwell::MaxwellSpeed;
use maxwell_mean::summation::MeanEstimates;

/// Problem-instance parameters: one million grid points at 1e-3 spacing,
/// spanning roughly ±500 around zero.
const GRID_SIZE: usize = 1_000_000;
const GRID_STEP: f32 = 1e-3;

fn main() -> Result<()> {
    print!("Type in the value of T: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read temperature from stdin")?;
    let temperature: f64 = line
        .trim()
        .parse()
        .with_context(|| format!("temperature must be a number, got {:?}", line.trim()))?;

    let dist = MaxwellSpeed::new(temperature)?;
    let grid = dist.sample(GRID_SIZE, GRID_STEP);

    let signed = MeanEstimates::compute(grid.speeds(), grid.densities(), grid.dv())
        .context("sample grid is empty")?;
    let absolute = MeanEstimates::compute(grid.abs_speeds(), grid.densities(), grid.dv())
        .context("sample grid is empty")?;

    println!("Maxwell distribution for speed values: ");
    print_estimates(&signed);
    println!();
    println!("Maxwell distribution for absolute speed values: ");
    println!("Theoretical prediction:  {:.10}", dist.mean_abs_speed());
    print_estimates(&absolute);

    Ok(())
}

fn print_estimates(e: &MeanEstimates) {
    println!("Normal:                  {:.10}", e.naive);
    println!("Recursive:               {:.10}", e.pairwise);
    println!("Close value sums:        {:.10}", e.close_values);
    println!("Kahan sums:              {:.10}", e.kahan);
    println!("FMA sums:                {:.10}", e.fma);
    println!("Precise value sums:      {:.10}", e.precise);
}
