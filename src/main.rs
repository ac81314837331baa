use clap::Parser;
use numconv::utils::{logger, validation::Validate};
use numconv::{CliConfig, Result, TomlConfig, Translator};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();

    if config.json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(all_encoded) => {
            if all_encoded {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every requested output was produced.
fn run(config: &CliConfig) -> Result<bool> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading policy from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            Some(file_config)
        }
        None => None,
    };
    let policy = file_config
        .as_ref()
        .map(|c| c.policy)
        .unwrap_or_default();

    let input = config.input_system()?;
    let outputs = match config.output_systems()? {
        Some(outputs) => outputs,
        None => match file_config.as_ref().map(TomlConfig::default_outputs).transpose()? {
            Some(Some(outputs)) => outputs,
            _ => input.others(),
        },
    };

    let translator = Translator::new(policy)?;
    let result = translator.translate(input, &config.number, &outputs)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&result.report(input))?);
    } else {
        println!("{}: {}", input, config.number.trim());
        for (system, outcome) in result.iter() {
            match outcome {
                Ok(value) => println!("{}: {}", system, value),
                Err(e) => println!("{}: error ({})", system, e),
            }
        }
    }

    Ok(!result.has_failures())
}
