use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reference curve the samples are scattered around.
fn curve(x: f64) -> f64 {
    2.0 * (x / 10.0).exp() - x * x - x + 2.0
}

/// One sample line: `x y curve(x) flag`, flagged when the point lies below the curve.
struct Sample {
    x: f64,
    y: f64,
    target: f64,
}

impl Sample {
    fn generate(rng: &mut StdRng) -> Self {
        // x in [-100.00, 99.99] on a 0.01 grid
        let x = rng.gen_range(-100i32..100) as f64 + rng.gen_range(0u32..100) as f64 / 100.0;
        let target = curve(x);
        let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let y = target
            + sign * rng.gen_range(0u32..10_000) as f64
            + rng.gen_range(0u32..100) as f64 / 100.0;
        Sample { x, y, target }
    }

    fn flag(&self) -> f64 {
        if self.target > self.y { 1.0 } else { 0.0 }
    }

    fn write_line<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "{:.4} {:.4} {:.4} {:.4}",
            self.x,
            self.y,
            self.target,
            self.flag()
        )
    }
}

/// Write `count` samples to `path`, returning how many were flagged.
fn write_samples(path: &Path, count: usize, rng: &mut StdRng) -> Result<usize> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let mut flagged = 0;

    for _ in 0..count {
        let sample = Sample::generate(rng);
        if sample.flag() > 0.5 {
            flagged += 1;
        }
        sample
            .write_line(&mut out)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    out.flush()
        .with_context(|| format!("flushing {}", path.display()))?;

    Ok(flagged)
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    for (name, count) in [("demo.data", 10_000), ("demo.test", 1_000)] {
        let flagged = write_samples(Path::new(name), count, &mut rng)?;
        println!("Wrote {count} samples ({flagged} flagged) to {name}");
    }

    Ok(())
}
