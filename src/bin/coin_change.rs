use change_algos::benchmark::{run_benchmark, Algorithm, BenchmarkConfig};
use change_algos::Result;

fn main() -> Result<()> {
    let config = BenchmarkConfig::default();

    println!("Greedy algorithm result:");
    println!(
        "{}",
        Algorithm::Greedy.make_change(&config.denominations, config.demo_amount)?
    );

    println!("\nDynamic programming result:");
    println!(
        "{}",
        Algorithm::Dynamic.make_change(&config.denominations, config.demo_amount)?
    );

    println!("\nExecution time comparison:");
    let records = run_benchmark(&config)?;
    for algorithm in Algorithm::ALL {
        println!("Testing {}:", algorithm);
        for record in records.iter().filter(|r| r.algorithm == algorithm) {
            println!("{}", record);
        }
        if algorithm == Algorithm::Greedy {
            println!();
        }
    }

    Ok(())
}
