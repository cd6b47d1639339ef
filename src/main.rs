use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use vocabgen::application::{
    BuildOptions, BuildService, CheckService, GenerateOptions, GenerateService, InitService,
};
use vocabgen::cli::{format_check_report, format_generation_reports, Cli, Commands};
use vocabgen::domain::OutputFormat;
use vocabgen::error::VocabError;
use vocabgen::infrastructure::{setup_logger, FileSystemRepository};

fn main() {
    let cli = Cli::parse();
    setup_logger(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), VocabError> {
    match cli.command {
        Some(Commands::Generate { config, languages }) => generate(config, languages),
        Some(Commands::Build {
            language,
            output,
            format,
            template,
            inputs,
        }) => {
            let format = OutputFormat::from_str(&format).map_err(VocabError::Config)?;
            let service = BuildService::new(std::env::current_dir()?);

            println!("Starting dictionaries generation...");
            let report = service.execute(BuildOptions {
                language,
                inputs,
                output,
                format,
                template,
            })?;
            print!("{}", format_generation_reports(&[report]));
            println!("Dictionaries generated.");
            Ok(())
        }
        Some(Commands::Check { inputs }) => {
            let repo = FileSystemRepository::new(std::env::current_dir()?);
            let report = CheckService::new(repo).execute(&inputs)?;
            print!("{}", format_check_report(&report));
            Ok(())
        }
        Some(Commands::Init { path }) => {
            let manifest_path = InitService::execute(&path)?;
            println!("Initialized vocabgen project at {}", manifest_path.display());
            Ok(())
        }
        // No subcommand runs the manifest, like a plain build step
        None => generate(None, Vec::new()),
    }
}

fn generate(config: Option<PathBuf>, languages: Vec<String>) -> Result<(), VocabError> {
    let repo = FileSystemRepository::discover(config.as_deref())?;
    let service = GenerateService::new(repo);

    println!("Starting dictionaries generation...");
    let reports = service.execute(GenerateOptions { languages })?;
    print!("{}", format_generation_reports(&reports));
    println!("Dictionaries generated.");
    Ok(())
}
