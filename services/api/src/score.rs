use clap::Args;
use receipt_processor::error::AppError;
use receipt_processor::receipts::{receipt_id, validate_receipt, ScoreCard, ScoringEngine};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON document
    pub(crate) path: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let file = File::open(&args.path)?;
    let raw: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(std::io::Error::from)?;

    let (id, card) = score_document(&raw)?;
    print!("{}", render_score(&id.to_string(), &card));
    Ok(())
}

fn score_document(
    raw: &Value,
) -> Result<(receipt_processor::receipts::ReceiptId, ScoreCard), AppError> {
    let receipt = validate_receipt(raw)?;
    let card = ScoringEngine::default().score(&receipt);
    Ok((receipt_id(raw), card))
}

fn render_score(id: &str, card: &ScoreCard) -> String {
    let mut out = format!("Receipt {id}\n");
    for component in &card.components {
        out.push_str(&format!(
            "- {}: {} ({})\n",
            component.rule.label(),
            component.points,
            component.notes
        ));
    }
    out.push_str(&format!("Total points: {}\n", card.total));
    out
}
