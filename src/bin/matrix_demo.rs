use anyhow::{ensure, Context, Result};
use clap::{Arg, Command, ValueHint};
use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

use dense_matrix::IntMatrix;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("MATRIX_LOG", "warn,dense_matrix=info"))
        .init();

    let matches = Command::new("matrix-demo")
        .version(clap::crate_version!())
        .about("Walks through every dense matrix operation and prints the results")
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for the random matrices. Seeds from entropy when omitted.")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("size")
                .long("size")
                .help("Side of the random square matrices")
                .default_value("3")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("save")
                .long("save")
                .help("Write the sum matrix to this file, then read it back")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("load")
                .long("load")
                .help("Read a matrix from this file and print its shape and transpose")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .get_matches();

    let size = *matches.get_one::<usize>("size").unwrap_or(&3);
    let mut rng = match matches.get_one::<u64>("seed") {
        Some(seed) => {
            info!("seeding random matrices with {}", seed);
            StdRng::seed_from_u64(*seed)
        }
        None => StdRng::from_entropy(),
    };

    let m1 = IntMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
    let m2 = IntMatrix::from_rows(vec![vec![7, 8, 9], vec![10, 11, 12]])?;
    let sum = (&m1 + &m2)?;
    println!("{}", sum);
    println!("{}", (&m2 - &m1)?);

    let r1 = IntMatrix::random_default(size, size, &mut rng).context("building random matrix")?;
    println!("{}", r1);
    println!("{}", IntMatrix::zero(2, 2)?);
    println!("{}", r1.transpose()?);
    println!("{:?}\n", r1.shape());
    let r2 = IntMatrix::random_default(size, size, &mut rng).context("building random matrix")?;
    println!("{}", (&r1 * &r2)?);

    if let Some(path) = matches.get_one::<PathBuf>("save") {
        sum.save(path)
            .with_context(|| format!("saving matrix to {}", path.display()))?;
        let reloaded = IntMatrix::load(path)
            .with_context(|| format!("reloading matrix from {}", path.display()))?;
        ensure!(reloaded == sum, "{} did not round trip", path.display());
        info!("round trip through {} ok", path.display());
    }

    if let Some(path) = matches.get_one::<PathBuf>("load") {
        let loaded = IntMatrix::load(path)
            .with_context(|| format!("loading matrix from {}", path.display()))?;
        println!("{:?}\n", loaded.shape());
        println!("{}", loaded.transpose()?);
    }

    Ok(())
}
