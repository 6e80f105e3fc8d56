//! The `giftbank init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create giftbank.toml
    if Path::new("giftbank.toml").exists() {
        println!("giftbank.toml already exists, skipping.");
    } else {
        std::fs::write("giftbank.toml", SAMPLE_CONFIG)?;
        println!("Created giftbank.toml");
    }

    // Create sample question bank
    std::fs::create_dir_all("question-banks")?;
    let sample_path = Path::new("question-banks/sample.gift");
    if sample_path.exists() {
        println!("question-banks/sample.gift already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_BANK)?;
        println!("Created question-banks/sample.gift");
    }

    println!("\nNext steps:");
    println!("  1. Run: giftbank questions list question-banks/sample.gift");
    println!("  2. Run: giftbank exam build question-banks/sample.gift --ids G1,G2,...");
    println!("  3. Run: giftbank exam simulate giftbank-output/exam.gift");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# giftbank configuration

output_dir = "./giftbank-output"

[exam]
min_questions = 15
max_questions = 20

[histogram]
width = 30
bar = "█"
"#;

const SAMPLE_BANK: &str = include_str!("../../../../question-banks/sample.gift");
