use log::warn;
use mezzotone::config::load_config;
use mezzotone::image::io::{decode_file, has_supported_extension, write_json_file, write_text_file};
use mezzotone::{assemble, Converter};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path)).map_err(|e| e.to_string())?;
    let options = config.render_options().map_err(|e| e.to_string())?;

    if !has_supported_extension(&config.input) {
        warn!(
            "{} does not have a known image extension; attempting to decode anyway",
            config.input.display()
        );
    }
    let bitmap = decode_file(&config.input)
        .map_err(|e| format!("Failed to decode {}: {e}", config.input.display()))?;

    let converter = Converter::new(options);
    let report = converter.convert_with_report(&bitmap.as_view());
    let text = assemble(&report.glyphs);

    match &config.output.text {
        Some(path) => {
            write_text_file(path, &text)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            eprintln!(
                "Saved {}x{} glyphs to {}",
                report.trace.geometry.cols,
                report.trace.geometry.rows,
                path.display()
            );
        }
        None => print!("{text}"),
    }

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)
            .map_err(|e| format!("Failed to write report {}: {e}", path.display()))?;
        eprintln!("Conversion report written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: mezzotone <config.json>".to_string()
}
