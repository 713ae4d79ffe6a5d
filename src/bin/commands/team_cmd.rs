use anyhow::{Context, Result};
use serde_json::json;
use std::path::PathBuf;
use wildscan::file_reader;
use wildscan::team::{read_efficiencies, select_team};

use crate::cli_utils::join_spaced;

pub fn cmd_team(input: PathBuf, json: bool) -> Result<()> {
    let mut tokens = file_reader::open_tokens(&input)?;
    let efficiencies = read_efficiencies(&mut tokens)
        .with_context(|| format!("Failed to read players from {}", input.display()))?;

    let team = select_team(&efficiencies).context("Failed to select a team")?;
    let ids = team.member_ids();

    if json {
        // Totals can exceed u64, the largest JSON number serde_json writes
        let output = json!({
            "total_efficiency": team.total_efficiency().to_string(),
            "size": ids.len(),
            "members": ids,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", team.total_efficiency());
        println!("{}", join_spaced(&ids));
    }

    Ok(())
}
