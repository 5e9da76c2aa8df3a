use std::{env::args, fs::File};

use ranked::{
    config::load_config,
    entry::{load_entries, store_entries, Entry},
    SortedVec,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> anyhow::Result<()> {
    let path = match args().nth(1) {
        Some(filename) => filename,
        None => {
            println!(
                "Usage: {} [FILE] [-e|--export]",
                args().next().unwrap_or_else(|| "ranked".into())
            );
            std::process::exit(1)
        }
    };
    let export = args()
        .nth(2)
        .filter(|s| s == "-e" || s == "--export")
        .is_some();

    // stdout carries the rows
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config = load_config(&path)?;
    let table = load_entries(&path, &config)?;
    let entries: SortedVec<Entry> = table.entries.into_iter().collect();

    if export {
        let out = format!("{}-sorted.csv", path);
        match File::create(&out)
            .map_err(anyhow::Error::from)
            .and_then(|f| Ok(store_entries(f, table.headers.as_deref(), &entries)?))
        {
            Ok(()) => println!("exported!"),
            Err(e) => println!("failed to export: {:?}", e),
        }
    } else {
        match (entries.min(), entries.max()) {
            (Some(min), Some(max)) => {
                println!("min: {}", min.key);
                println!("max: {}", max.key);
            }
            _ => println!("no rows"),
        }
        for e in &entries {
            println!("{}", e);
        }
    }

    Ok(())
}
