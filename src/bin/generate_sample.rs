use chrono::{Days, NaiveDate};

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const OUTPUT_PATH: &str = "nasa.csv";
const ROWS: usize = 60;

const HEADERS: [&str; 10] = [
    "Neo Reference ID",
    "Name",
    "Absolute Magnitude",
    "Est Dia in KM(min)",
    "Est Dia in KM(max)",
    "Close Approach Date",
    "Relative Velocity km per sec",
    "Miss Dist.(kilometers)",
    "Orbiting Body",
    "Hazardous",
];

fn neo_name(rng: &mut SimpleRng) -> String {
    let year = 1995 + rng.next_u64() % 26;
    let a = (b'A' + (rng.next_u64() % 26) as u8) as char;
    let b = (b'A' + (rng.next_u64() % 26) as u8) as char;
    let n = rng.next_u64() % 300;
    if n == 0 {
        format!("{year} {a}{b}")
    } else {
        format!("{year} {a}{b}{n}")
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(OUTPUT_PATH).expect("Failed to create output file");
    writer.write_record(HEADERS).expect("Failed to write header");

    // The well-known first row, handy for smoke-testing queries.
    writer
        .write_record([
            "3703080",
            "2015 AB",
            "21.6",
            "0.1272",
            "0.2845",
            "1995-01-08",
            "6.1158",
            "48077460",
            "Earth",
            "True",
        ])
        .expect("Failed to write record");

    let epoch = NaiveDate::from_ymd_opt(1995, 1, 1).expect("valid epoch");

    for i in 1..ROWS {
        let id = 3_700_000 + rng.next_u64() % 100_000;
        let name = neo_name(&mut rng);
        let magnitude = rng.gauss(22.0, 3.0);
        let dia_min = (magnitude / 100.0).abs() + rng.next_f64() * 0.4;
        let dia_max = dia_min * 2.236;
        let date = epoch + Days::new(rng.next_u64() % 9000);
        let velocity = rng.gauss(13.0, 5.0).abs();
        let miss_dist = rng.next_f64() * 7.5e7;
        let hazardous = rng.next_f64() < 0.16;

        // Leave occasional holes so the missing-value paths are reachable
        // from generated data.
        let magnitude = if i % 17 == 0 {
            String::new()
        } else {
            format!("{magnitude:.1}")
        };
        let date = if i % 23 == 0 {
            "unknown".to_string()
        } else {
            date.format("%Y-%m-%d").to_string()
        };

        writer
            .write_record([
                id.to_string(),
                name,
                magnitude,
                format!("{dia_min:.4}"),
                format!("{dia_max:.4}"),
                date,
                format!("{velocity:.4}"),
                format!("{miss_dist:.0}"),
                "Earth".to_string(),
                if hazardous { "True".into() } else { "False".into() },
            ])
            .expect("Failed to write record");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {ROWS} close approaches to {OUTPUT_PATH}");
}
