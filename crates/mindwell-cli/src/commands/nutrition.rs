//! Food photo analysis command.

use std::path::PathBuf;

use clap::Subcommand;
use mindwell_core::nutrition::NutritionClient;
use mindwell_core::storage::Config;

#[derive(Subcommand)]
pub enum NutritionAction {
    /// Analyze a base64-encoded meal photo
    Analyze {
        /// File containing the base64 JPEG payload
        file: PathBuf,
        /// Free-text hint forwarded to the analyzer
        #[arg(long)]
        hint: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: NutritionAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let rt = super::runtime()?;

    match action {
        NutritionAction::Analyze { file, hint, json } => {
            let payload = std::fs::read_to_string(&file)?;
            let client = NutritionClient::with_timeout(
                config.nutrition.base_url,
                config.nutrition.timeout_secs,
            );

            let analysis =
                rt.block_on(client.analyze_photo(payload.trim(), hint.as_deref()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
                return Ok(());
            }

            for food in &analysis.foods {
                println!(
                    "{:<24} {:>8} {:>6.0} kcal  P {:>4.1}  F {:>4.1}  C {:>4.1}",
                    food.name, food.portion, food.calories, food.protein_g, food.fat_g, food.carbs_g,
                );
            }
            println!(
                "total: {:.0} kcal  P {:.1}  F {:.1}  C {:.1}",
                analysis.totals.calories,
                analysis.totals.protein_g,
                analysis.totals.fat_g,
                analysis.totals.carbs_g,
            );
            if let Some(gi) = analysis.average_gi {
                println!("average GI: {gi:.0}");
            }
        }
    }
    Ok(())
}
