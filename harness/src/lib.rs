use std::error::Error;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use fastio::{Printer, PrinterOptions, Scanner, ScannerOptions};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub type Value = i64;
pub type Weight = f64;

/// Bound on generated absolute values; keeps prefix sums of a million
/// values inside `i64`.
pub const MAX_ABS_VALUE: Value = 1_000_000_000;
pub const MEAN_PRECISION: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub input: String,
    pub output: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub jobs: Vec<Job>,
    /// values per generated problem
    pub size: usize,
    pub seed: u64,
    pub scanner: ScannerOptions,
    pub printer: PrinterOptions,
}

impl Default for Config {
    fn default() -> Self {
        let jobs = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|name| Job {
                input: format!("./input/{}.txt", name),
                output: format!("./output/{}.txt", name),
            })
            .collect();
        Self {
            jobs,
            size: 100_000,
            seed: 2018,
            scanner: ScannerOptions::default(),
            printer: PrinterOptions::default(),
        }
    }
}

impl Config {
    /// Reads a JSON config, or returns the defaults when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(path) => {
                let file = File::open(path)?;
                Ok(serde_json::from_reader(BufReader::new(file))?)
            }
            None => Ok(Self::default()),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub values: Vec<Value>,
    pub weights: Vec<Weight>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    pub sorted: Vec<Value>,
    /// `prefix[i]` sums the first `i` sorted values
    pub prefix: Vec<Value>,
    pub mean: f64,
    pub distinct: bool,
}

fn create(path: impl AsRef<Path>) -> Result<File, Box<dyn Error>> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    Ok(File::create(path)?)
}

pub fn random_problem(size: usize, rng: &mut impl Rng) -> Problem {
    let values = (0..size)
        .map(|_| rng.gen_range(-MAX_ABS_VALUE, MAX_ABS_VALUE + 1))
        .collect();
    // weights with at most three decimals survive the text round trip exactly
    let weights = (0..size)
        .map(|_| f64::from(rng.gen_range(0u32, 100_000)) / 1000.0)
        .collect();
    Problem { values, weights }
}

pub fn write_problem<W: Write>(out: &mut Printer<W>, problem: &Problem) -> fastio::Result<()> {
    out.write_usize(problem.values.len()).ln();
    out.write_slice(&problem.values, " ").ln();
    out.write_slice_with(&problem.weights, " ", |&w| Fixed(w, 3)).ln();
    out.try_flush()
}

pub fn generate(
    file_path: impl AsRef<Path>,
    size: usize,
    rng: &mut impl Rng,
    options: &PrinterOptions,
) -> Result<(), Box<dyn Error>> {
    let problem = random_problem(size, rng);
    let mut out = Printer::with_options(create(file_path)?, options.clone());
    write_problem(&mut out, &problem)?;
    Ok(())
}

pub fn parse_problem<R: Read>(sc: &mut Scanner<R>) -> fastio::Result<Problem> {
    let n = sc.try_next_i64()? as usize;
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        values.push(sc.try_next_i64()?);
    }
    let mut weights = Vec::with_capacity(n);
    for _ in 0..n {
        weights.push(sc.try_next_f64()?);
    }
    Ok(Problem { values, weights })
}

pub fn read_problem(
    file_path: impl AsRef<Path>,
    options: &ScannerOptions,
) -> Result<Problem, Box<dyn Error>> {
    let file = File::open(file_path)?;
    let mut sc = Scanner::with_options(file, options.clone());
    Ok(parse_problem(&mut sc)?)
}

pub fn solve(problem: &Problem) -> Solution {
    let mut sorted = problem.values.clone();
    sorted.sort_unstable();

    let mut prefix = Vec::with_capacity(sorted.len() + 1);
    prefix.push(0);
    for (i, v) in sorted.iter().enumerate() {
        prefix.push(prefix[i] + v);
    }

    let total_weight: f64 = problem.weights.iter().sum();
    let mean = if total_weight > 0.0 {
        let weighted: f64 = problem
            .values
            .iter()
            .zip(&problem.weights)
            .map(|(&v, &w)| v as f64 * w)
            .sum();
        weighted / total_weight
    } else {
        0.0
    };

    let distinct = sorted.windows(2).all(|w| w[0] != w[1]);

    Solution {
        sorted,
        prefix,
        mean,
        distinct,
    }
}

pub fn write_solution<W: Write>(out: &mut Printer<W>, solution: &Solution) -> fastio::Result<()> {
    out.write_slice(&solution.sorted, " ").ln();
    out.write_slice(&solution.prefix, " ").ln();
    out.write_fixed(solution.mean, MEAN_PRECISION).ln();
    out.write_bool(solution.distinct).ln();
    out.try_flush()
}

/// Reads a problem, solves it and writes the answer.
pub fn run(job: &Job, scanner: &ScannerOptions, printer: &PrinterOptions) -> Result<(), Box<dyn Error>> {
    let problem = read_problem(&job.input, scanner)?;
    log::debug!("{}: {} values", job.input, problem.values.len());
    let solution = solve(&problem);
    let mut out = Printer::with_options(create(&job.output)?, printer.clone());
    write_solution(&mut out, &solution)?;
    Ok(())
}

pub fn parse_solution<R: Read>(
    sc: &mut Scanner<R>,
    n: usize,
    yes: &str,
) -> fastio::Result<Solution> {
    let mut sorted = Vec::with_capacity(n);
    for _ in 0..n {
        sorted.push(sc.try_next_i64()?);
    }
    let mut prefix = Vec::with_capacity(n + 1);
    for _ in 0..=n {
        prefix.push(sc.try_next_i64()?);
    }
    let mean = sc.try_next_f64()?;
    let distinct = sc.try_next_token()? == yes;
    Ok(Solution {
        sorted,
        prefix,
        mean,
        distinct,
    })
}

pub fn read_solution(
    n: usize,
    file_path: impl AsRef<Path>,
    options: &ScannerOptions,
    yes: &str,
) -> Result<Solution, Box<dyn Error>> {
    let file = File::open(file_path)?;
    let mut sc = Scanner::with_options(file, options.clone());
    Ok(parse_solution(&mut sc, n, yes)?)
}

/// One point per correct line of output.
pub fn score(expected: &Solution, actual: &Solution) -> usize {
    let tolerance = 10f64.powi(-(MEAN_PRECISION as i32)) * expected.mean.abs().max(1.0);
    [
        expected.sorted == actual.sorted,
        expected.prefix == actual.prefix,
        (expected.mean - actual.mean).abs() <= tolerance,
        expected.distinct == actual.distinct,
    ]
    .iter()
    .filter(|&&ok| ok)
    .count()
}

/// Formats through `Printer::write_fixed` when used as a `Printable`.
#[derive(Copy, Clone, Debug)]
pub struct Fixed(pub f64, pub usize);

impl fastio::Printable for Fixed {
    fn print_to<W: Write>(&self, out: &mut Printer<W>) {
        out.write_fixed(self.0, self.1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn render(f: impl FnOnce(&mut Printer<&mut Vec<u8>>)) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut p = Printer::new(&mut out);
            f(&mut p);
        }
        out
    }

    #[test]
    fn solves_small_problem() {
        let problem = Problem {
            values: vec![3, 1, 4, 1, 5],
            weights: vec![1.0, 0.0, 1.0, 0.0, 2.0],
        };
        let solution = solve(&problem);
        assert_eq!(solution.sorted, vec![1, 1, 3, 4, 5]);
        assert_eq!(solution.prefix, vec![0, 1, 2, 5, 9, 14]);
        assert_eq!(solution.mean, 4.25);
        assert!(!solution.distinct);

        let out = render(|p| write_solution(p, &solution).unwrap());
        assert_eq!(out, b"1 1 3 4 5\n0 1 2 5 9 14\n4.250000\nNo\n".to_vec());
    }

    #[test]
    fn zero_weights_give_zero_mean() {
        let problem = Problem {
            values: vec![7],
            weights: vec![0.0],
        };
        let solution = solve(&problem);
        assert_eq!(solution.mean, 0.0);
        assert!(solution.distinct);
    }

    #[test]
    fn problem_text_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        let problem = random_problem(500, &mut rng);
        let text = render(|p| write_problem(p, &problem).unwrap());
        let parsed = parse_problem(&mut Scanner::new(text.as_slice())).unwrap();
        assert_eq!(parsed, problem);
    }

    #[test]
    fn written_solution_scores_full() {
        let mut rng = StdRng::seed_from_u64(11);
        let problem = random_problem(300, &mut rng);
        let expected = solve(&problem);
        let text = render(|p| write_solution(p, &expected).unwrap());
        let actual =
            parse_solution(&mut Scanner::new(text.as_slice()), problem.values.len(), "Yes").unwrap();
        assert_eq!(score(&expected, &actual), 4);
    }

    #[test]
    fn wrong_lines_lose_points() {
        let expected = solve(&Problem {
            values: vec![2, 1],
            weights: vec![1.0, 1.0],
        });
        let text = b"1 2\n0 1 4\n1.500000\nNo\n";
        let actual = parse_solution(&mut Scanner::new(&text[..]), 2, "Yes").unwrap();
        assert_eq!(score(&expected, &actual), 2);
    }

    #[test]
    fn truncated_solution_is_an_error() {
        let text = b"1 2\n0 1";
        assert!(matches!(
            parse_solution(&mut Scanner::new(&text[..]), 2, "Yes"),
            Err(fastio::Error::UnexpectedEof)
        ));
    }

    #[test]
    fn config_defaults_and_overrides() {
        let config = Config::default();
        assert_eq!(config.jobs.len(), 5);
        assert_eq!(config.jobs[0].input, "./input/a.txt");

        let config: Config = serde_json::from_str(
            r#"{
                "jobs": [{ "input": "in.txt", "output": "out.txt" }],
                "printer": { "yes": "YES", "no": "NO" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.jobs.len(), 1);
        assert_eq!(config.size, 100_000);
        assert_eq!(config.printer.yes, "YES");
    }
}
