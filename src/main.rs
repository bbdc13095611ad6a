use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use zobrist_keygen::{GeneratorConfig, KeygenError};

fn main() -> Result<(), KeygenError> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("Logger already initialized");

    let config = GeneratorConfig::default();
    zobrist_keygen::run(&config)?;

    info!("Generated {}", config.output_path.display());
    Ok(())
}
