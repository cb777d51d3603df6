use clap::{Arg, Command};
use gtrans::{Language, Translator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("gtrans")
        .version("0.1.0")
        .about("Free Google Translate from the command line, no API key required")
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("target")
                .help("Target language (code or name, e.g. es, german, zh-cn)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .short('s')
                .help("Source language (default: auto-detect)")
                .default_value("auto"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Also print detected language and pronunciations")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches.get_one::<String>("text").unwrap();
    let target_arg = matches.get_one::<String>("target").unwrap();
    let source_arg = matches.get_one::<String>("source").unwrap();
    let verbose = matches.get_flag("verbose");

    let Some(target) = Language::resolve(target_arg) else {
        eprintln!("❌ Unknown target language: \"{}\"", target_arg);
        return Err("unknown target language".into());
    };
    let Some(source) = Language::resolve(source_arg) else {
        eprintln!("❌ Unknown source language: \"{}\"", source_arg);
        return Err("unknown source language".into());
    };

    let translator = Translator::new()?;
    let result = match translator.translate_from(text, target, source).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("❌ Translation failed: {}", e);
            return Err(e.into());
        }
    };

    println!("{}", result.translated_text);

    if verbose {
        println!();
        println!("🌍 {} → {}", result.source_language, result.target);
        if let Some(pronunciation) = &result.translated_pronunciation {
            println!("🔊 translation: {}", pronunciation);
        }
        if let Some(pronunciation) = &result.source_pronunciation {
            println!("🔊 source:      {}", pronunciation);
        }
    }

    Ok(())
}
