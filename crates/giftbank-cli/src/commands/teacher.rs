//! The `giftbank teacher` commands.

use std::path::PathBuf;

use anyhow::Result;

use giftbank_core::config::GiftbankConfig;
use giftbank_report::{write_vcard, TeacherCard};

pub fn vcard(card: TeacherCard, output: Option<PathBuf>, config: &GiftbankConfig) -> Result<()> {
    let output = output.unwrap_or_else(|| config.output_dir.join("teacher.vcf"));
    write_vcard(&card, &output)?;
    tracing::info!("wrote vCard for {} {}", card.first_name, card.last_name);
    println!("vCard written to {}", output.display());
    Ok(())
}
