use lib::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use threadpool::ThreadPool;

use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::Relaxed;
use std::sync::Arc;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = std::env::args().collect::<Vec<_>>();
    let config = Config::load(args.get(2).map(String::as_str))?;

    match args.get(1).map(String::as_str) {
        Some("gen") => {
            let mut rng = StdRng::seed_from_u64(config.seed);
            for job in &config.jobs {
                generate(&job.input, config.size, &mut rng, &config.printer)?;
                log::info!("{}: {} values", job.input, config.size);
            }
        }
        Some("check") => {
            let mut scores = Vec::new();
            for job in &config.jobs {
                let score = check(job, &config)?;
                println!("{} score: {}", job.input, score);
                scores.push(score);
            }
            println!("total {:?}", &scores.iter().sum::<usize>());
        }
        Some("solve") => {
            let timer = Instant::now();
            let pool = ThreadPool::new(5);
            let failed = Arc::new(AtomicUsize::new(0));
            for job in config.jobs.iter().cloned() {
                let scanner = config.scanner.clone();
                let printer = config.printer.clone();
                let failed = Arc::clone(&failed);
                pool.execute(move || {
                    let timer = Instant::now();
                    match run(&job, &scanner, &printer) {
                        Ok(()) => println!("{} time: {}", job.input, timer.elapsed().as_millis()),
                        Err(err) => {
                            log::error!("{}: {}", job.input, err);
                            failed.fetch_add(1, Relaxed);
                        }
                    }
                })
            }
            pool.join();
            println!("total time: {}", timer.elapsed().as_millis());

            let failed = failed.load(Relaxed) + pool.panic_count();
            if failed > 0 {
                return Err(format!("{} of {} jobs failed", failed, config.jobs.len()).into());
            }
        }
        _ => panic!("pass either gen, solve or check"),
    }

    Ok(())
}

fn check(job: &Job, config: &Config) -> Result<usize, Box<dyn std::error::Error>> {
    let problem = read_problem(&job.input, &config.scanner)?;
    let expected = solve(&problem);
    let actual = read_solution(
        problem.values.len(),
        &job.output,
        &config.scanner,
        &config.printer.yes,
    )?;
    Ok(score(&expected, &actual))
}
