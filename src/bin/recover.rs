use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use shamir_reconstruct::record::ShareRecord;
use shamir_reconstruct::report::{self, DatasetResult};

#[derive(Parser, Debug)]
#[command(name = "recover")]
#[command(about = "Recover polynomial secrets from share record files", long_about = None)]
struct Args {
    /// Input record files (JSON)
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_record(path: &Path) -> Result<ShareRecord, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let record: ShareRecord = serde_json::from_str(&raw)?;
    Ok(record)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    println!("Processing {} record file(s)...", args.inputs.len());

    let mut datasets = Vec::new();
    let mut unreadable = Vec::new();
    for path in &args.inputs {
        let name = path.display().to_string();
        match load_record(path) {
            Ok(record) => datasets.push((name, record)),
            Err(e) => {
                log::warn!("{}: {}", name, e);
                unreadable.push(DatasetResult {
                    name,
                    outcome: Err(e.to_string()),
                });
            }
        }
    }

    let mut results = report::recover_all(&datasets);
    results.extend(unreadable);

    let summary = report::render(&results);
    match &args.output {
        Some(path) => {
            fs::write(path, &summary)?;
            println!("Report written to {}", path.display());
        }
        None => print!("{}", summary),
    }

    Ok(())
}
