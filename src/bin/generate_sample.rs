use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in [lo, hi).
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Ground truth the synthetic rows are drawn from; the fitted model should
/// land near these numbers on the full dataset.
const INTERCEPT: f64 = 20.0;
const COEF_FARMERS: f64 = 0.8;
const COEF_INVESTMENT: f64 = 0.05;
const COEF_PROJECTS: f64 = 3.0;
const COEF_WORKFORCE: f64 = 0.2;

const ROWS_PER_DISTRICT: usize = 8;

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // (district, activity scale): larger districts get larger draws.
    let districts: [(&str, f64); 10] = [
        ("Binong", 1.0),
        ("Blanakan", 1.4),
        ("Ciasem", 1.2),
        ("Cikaum", 0.7),
        ("Cipunagara", 0.9),
        ("Compreng", 0.8),
        ("Pabuaran", 1.1),
        ("Pagaden", 1.3),
        ("Pamanukan", 1.5),
        ("Patokbeusi", 1.0),
    ];

    let output_path = "dataset_invest_juta.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record([
        "kemendagri_nama_kecamatan",
        "jumlah_pembudidaya",
        "invest_juta",
        "jumlah_proyek_perikanan",
        "jumlah_tenaga_kerja_perikanan",
        "jumlah_produksi_ikan_gurame",
    ])?;

    let mut rows = 0usize;
    for (district, scale) in districts {
        for i in 0..ROWS_PER_DISTRICT {
            let farmers = (rng.uniform(40.0, 400.0) * scale).round();
            let investment = (rng.uniform(20.0, 800.0) * scale * 10.0).round() / 10.0;
            let projects = (rng.uniform(1.0, 15.0) * scale).round().max(1.0);
            let workforce = (rng.uniform(30.0, 500.0) * scale).round();

            let production = (INTERCEPT
                + COEF_FARMERS * farmers
                + COEF_INVESTMENT * investment
                + COEF_PROJECTS * projects
                + COEF_WORKFORCE * workforce
                + rng.gauss(0.0, 25.0))
            .max(0.0)
            .round();

            // A few districts report incomplete rows; leave one cell blank
            // so the loader's skip-from-fitting path sees real data.
            let investment_cell = if i == ROWS_PER_DISTRICT - 1 && scale < 0.8 {
                String::new()
            } else {
                format!("{investment}")
            };

            writer.write_record([
                district.to_string(),
                format!("{farmers}"),
                investment_cell,
                format!("{projects}"),
                format!("{workforce}"),
                format!("{production}"),
            ])?;
            rows += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    println!(
        "Wrote {rows} rows across {} districts to {output_path}",
        districts.len()
    );
    Ok(())
}
