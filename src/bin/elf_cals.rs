use env_logger::{Builder, Target};
use log::LevelFilter;

use elf_cals::summarize_file;

const INPUT: &str = "elfCals.txt";

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .target(Target::Stderr)
        .init();

    let summary = summarize_file(INPUT)?;
    println!("{}", summary);

    Ok(())
}
