//! Command line front end for the subdomain engine.
//!
//! Runs the same validation, availability simulation, suggestions and DNS
//! generation as the HTTP API, without starting a server.
//!
//! # Usage
//!
//! ```bash
//! # List supported extensions
//! cargo run --bin domainctl -- extensions
//!
//! # Check a subdomain (prompts for anything omitted)
//! cargo run --bin domainctl -- check myshop .io
//! cargo run --bin domainctl -- check myshop.io
//!
//! # Suggest alternatives
//! cargo run --bin domainctl -- suggest myshop .io --seed 7
//!
//! # Generate DNS configuration
//! cargo run --bin domainctl -- generate myshop .io --target-url https://example.com --type path
//! ```
//!
//! # Environment Variables
//!
//! Reads the same variables as the server (`PLATFORM_HOST`,
//! `DNS_TTL_SECONDS`, `AVAILABILITY_RATIO`, `AVAILABILITY_SEED`,
//! `DOMAIN_EXTENSIONS`). `--seed` overrides `AVAILABILITY_SEED`.

use subdomain_creator::api::dto::generate::GenerateResponse;
use subdomain_creator::application::services::CheckOutcome;
use subdomain_creator::config::Config;
use subdomain_creator::domain::entities::{DnsConfiguration, DomainCandidate};
use subdomain_creator::state::AppState;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Select};

/// Check subdomains and generate DNS forwarding configuration.
#[derive(Parser)]
#[command(name = "domainctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for reproducible availability and suggestions
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported extensions
    Extensions,

    /// Validate a subdomain and simulate an availability check
    Check {
        /// Subdomain, or a full domain such as `myshop.io`
        subdomain: Option<String>,

        /// Extension including the leading dot (e.g. `.io`)
        extension: Option<String>,
    },

    /// Suggest alternative names
    Suggest {
        /// Base keyword
        keyword: String,

        /// Extension including the leading dot
        extension: String,
    },

    /// Generate DNS records and forwarding rules
    Generate {
        /// Subdomain, or a full domain such as `myshop.io`
        subdomain: Option<String>,

        /// Extension including the leading dot
        extension: Option<String>,

        /// URL the domain forwards to
        #[arg(short = 'u', long)]
        target_url: String,

        /// Forwarding type: 301, 302, 307, 308 or path
        #[arg(short = 't', long = "type")]
        forward_type: Option<String>,

        /// Print the configuration as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if cli.seed.is_some() {
        config.availability_seed = cli.seed;
    }
    config.validate()?;

    let state = AppState::from_config(&config)?;

    match cli.command {
        Commands::Extensions => list_extensions(&state),
        Commands::Check {
            subdomain,
            extension,
        } => check(&state, subdomain, extension)?,
        Commands::Suggest { keyword, extension } => {
            print_suggestions(&state.domain_service.suggest(&keyword, &extension))
        }
        Commands::Generate {
            subdomain,
            extension,
            target_url,
            forward_type,
            json,
        } => generate(&state, subdomain, extension, &target_url, forward_type, json)?,
    }

    Ok(())
}

fn list_extensions(state: &AppState) {
    println!("{}", "Supported extensions".bright_blue().bold());
    println!();

    for extension in state.domain_service.extensions() {
        println!("  {}", extension.cyan());
    }
}

/// Resolves the candidate from arguments, prompting for what is missing.
///
/// A lone `name.ext` argument is split on the longest catalog extension.
fn resolve_candidate(
    state: &AppState,
    subdomain: Option<String>,
    extension: Option<String>,
) -> Result<DomainCandidate> {
    let subdomain = match subdomain {
        Some(s) => s,
        None => Input::new().with_prompt("Subdomain").interact_text()?,
    };

    if let Some(extension) = extension {
        return Ok(DomainCandidate::new(subdomain, extension));
    }

    if let Some(candidate) = state.domain_service.catalog().split_domain(&subdomain) {
        return Ok(candidate);
    }

    let extensions = state.domain_service.extensions();
    let selection = Select::new()
        .with_prompt("Extension")
        .items(extensions)
        .default(0)
        .interact()?;

    Ok(DomainCandidate::new(subdomain, extensions[selection].as_str()))
}

/// Validates, checks availability, and suggests alternatives when taken.
///
/// # Output Format
///
/// ```text
/// myshop.io
///   ✗ Domain may be taken
///
/// Suggestions
///   myshop.io
///   myshop-app.io
///   ...
/// ```
fn check(state: &AppState, subdomain: Option<String>, extension: Option<String>) -> Result<()> {
    let candidate = resolve_candidate(state, subdomain, extension)?;

    println!("{}", candidate.full_domain().bright_white().bold());

    match state.domain_service.check(&candidate) {
        CheckOutcome::Invalid(errors) => {
            for error in errors {
                println!("  {} {}", "✗".red(), error.to_string().red());
            }
        }
        CheckOutcome::Checked(result) if result.available => {
            println!("  {} {}", "✓".green(), result.message.green());
        }
        CheckOutcome::Checked(result) => {
            println!("  {} {}", "✗".yellow(), result.message.yellow());
            println!();
            print_suggestions(
                &state
                    .domain_service
                    .suggest(&candidate.subdomain, &candidate.extension),
            );
        }
    }

    Ok(())
}

fn print_suggestions(suggestions: &[String]) {
    println!("{}", "Suggestions".bright_blue().bold());

    for suggestion in suggestions {
        println!("  {}", suggestion.cyan());
    }
}

/// Generates and prints the configuration.
///
/// A lone `name.ext` argument is split the same way as
/// [`subdomain_creator::domain::synthesizer::ConfigSynthesizer::generate_for_domain`],
/// so domains outside the catalog are accepted without prompting.
fn generate(
    state: &AppState,
    subdomain: Option<String>,
    extension: Option<String>,
    target_url: &str,
    forward_type: Option<String>,
    json: bool,
) -> Result<()> {
    let config = match (subdomain, extension) {
        (Some(domain), None) if domain.contains('.') => state.dns_service.generate_for_domain(
            &domain,
            state.domain_service.catalog(),
            target_url,
            forward_type.as_deref(),
        ),
        (subdomain, extension) => {
            let candidate = resolve_candidate(state, subdomain, extension)?;
            state
                .dns_service
                .generate(&candidate, target_url, forward_type.as_deref())
        }
    }
    .context("Failed to generate DNS configuration")?;

    if json {
        let body = serde_json::to_string_pretty(&GenerateResponse::from(config))?;
        println!("{body}");
    } else {
        print_configuration(&config);
    }

    Ok(())
}

/// Prints records and forwarding rules as aligned tables.
fn print_configuration(config: &DnsConfiguration) {
    println!(
        "{} {}",
        "DNS configuration for".bright_blue().bold(),
        config.domain.bright_white().bold()
    );
    println!();

    println!(
        "  {:<6} {:<5} {:<30} {:>6}",
        "Type".bright_white().bold(),
        "Name".bright_white().bold(),
        "Value".bright_white().bold(),
        "TTL".bright_white().bold()
    );
    println!("  {}", "─".repeat(50).bright_black());

    for record in &config.records {
        println!(
            "  {:<6} {:<5} {:<30} {:>6}",
            record.record_type.to_string(),
            record.name,
            record.value.cyan(),
            record.ttl
        );
    }

    if let Some(forwarding) = &config.forwarding {
        println!();
        println!(
            "  {} {} → {} ({})",
            "Redirect".bright_white().bold(),
            forwarding.from,
            forwarding.to.cyan(),
            forwarding.kind
        );
    }

    if let Some(path) = &config.path_forwarding {
        println!(
            "  {} {} → {}",
            "Path forward".bright_white().bold(),
            path.source,
            path.destination.cyan()
        );
    }
}
