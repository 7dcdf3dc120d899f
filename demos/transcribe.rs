use std::path::PathBuf;
use std::time::Instant;

use ipa_transcribe::{
    engine::TranscribeParams,
    languages::{latin, transcriber_for_code},
    Transcriber,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let code = args.next().unwrap_or_else(|| "la".to_string());
    let text = args.collect::<Vec<_>>().join(" ");
    let text = if text.is_empty() {
        "Gallia est omnis divisa in partes tres. Arma virumque cano, Troiae qui primus ab oris."
            .to_string()
    } else {
        text
    };

    let build_start = Instant::now();
    let transcriber = transcriber_for_code(&code)?;
    println!("Rule tables built in {:.2?}", build_start.elapsed());
    println!("Variants for '{code}': {:?}", transcriber.variant_labels());

    let run_start = Instant::now();
    let variants = transcriber.transcribe(&text)?;
    println!("Transcribed {} characters in {:.2?}", text.chars().count(), run_start.elapsed());

    if variants.is_empty() {
        println!("No transcription available for '{code}'");
    }
    for variant in &variants {
        println!("[{}] {}", variant.label, variant.ipa);
    }

    // Optional params file, e.g. {"fallback": "skip"}
    let params_path = PathBuf::from("transcribe.json");
    if params_path.exists() {
        let params = TranscribeParams::from_json_file(&params_path)?;
        let tuned = latin::transcriber()?.with_params(params);
        let report = tuned.transcribe_report(latin::CLASSICAL, &text)?;
        println!("With {}: {}", params_path.display(), report.output);
        for unmatched in &report.unmatched {
            println!("  no rule for {:?} at {}", unmatched.character, unmatched.position);
        }
    }

    Ok(())
}
