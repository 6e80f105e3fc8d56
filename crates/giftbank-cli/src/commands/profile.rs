//! The `giftbank profile` commands.

use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::{Cell, Table};

use giftbank_core::config::GiftbankConfig;
use giftbank_core::statistics::{compare_profiles, render_histogram, TypeProfile};

use super::load_bank;

fn load_profile(file: &Path) -> Result<TypeProfile> {
    let bank = load_bank(file)?;
    Ok(TypeProfile::of(&bank))
}

pub fn show(file: PathBuf) -> Result<()> {
    let profile = load_profile(&file)?;

    let mut table = Table::new();
    table.set_header(vec!["Type", "Count", "Percent"]);
    for share in &profile.kinds {
        table.add_row(vec![
            Cell::new(share.kind),
            Cell::new(share.count),
            Cell::new(format!("{:.1}%", share.percent)),
        ]);
    }

    println!("Profile of {}", file.display());
    println!("{table}");
    println!("Total: {} question(s)", profile.total);
    Ok(())
}

pub fn histogram(file: PathBuf, config: &GiftbankConfig) -> Result<()> {
    let profile = load_profile(&file)?;
    println!("{} ({} questions)", file.display(), profile.total);
    print!(
        "{}",
        render_histogram(&profile, config.histogram.width, &config.histogram.bar)
    );
    Ok(())
}

pub fn compare(first: PathBuf, second: PathBuf) -> Result<()> {
    let a = load_profile(&first)?;
    let b = load_profile(&second)?;
    let comparison = compare_profiles(&a, &b);

    let mut table = Table::new();
    table.set_header(vec![
        "Type".to_string(),
        first.display().to_string(),
        second.display().to_string(),
        "Delta".to_string(),
    ]);
    for diff in &comparison.diffs {
        table.add_row(vec![
            Cell::new(diff.kind),
            Cell::new(format!("{:.1}%", diff.percent_a)),
            Cell::new(format!("{:.1}%", diff.percent_b)),
            Cell::new(format!("{:+.1}", diff.delta)),
        ]);
    }

    println!("{table}");
    println!("Similarity: {:.2}%", comparison.similarity);
    Ok(())
}
