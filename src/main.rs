use clap::Parser;
use secret_santa::config::credentials;
use secret_santa::config::{Cli, Command, DisplayArgs, EmailArgs, GenArgs};
use secret_santa::core::{generator, roster};
use secret_santa::utils::error::ErrorSeverity;
use secret_santa::utils::{logger, validation::Validate};
use secret_santa::{Dispatcher, HttpMailer, LocalStorage, PairingStore, Result, SantaError, XorCodec};
use std::io::Write;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting secret-santa CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match run(cli).await {
        Ok(()) => {}
        Err(e) => {
            tracing::error!(
                "Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Gen(args) => run_gen(args).await,
        Command::Display(args) => run_display(args).await,
        Command::Email(args) => run_email(args).await,
    }
}

async fn run_gen(args: GenArgs) -> Result<()> {
    let participants = roster::load_participants(&args.names_file)?;
    let blacklist = roster::load_blacklist(&args.blacklist_file)?;
    tracing::info!(
        "Loaded {} participants and {} blacklist entries",
        participants.len(),
        blacklist.len()
    );

    let pairing = generator::generate(&participants, &blacklist)?;

    let store = pairing_store(&args.pairings.key_phrase);
    store.save(&args.pairings.pairings_file, &pairing).await?;

    println!(
        "✅ Generated pairings for {} people, wrote to {}",
        participants.len(),
        args.pairings.pairings_file
    );
    Ok(())
}

async fn run_display(args: DisplayArgs) -> Result<()> {
    if !args.sure.sure && !confirm() {
        println!("Aborted.");
        return Ok(());
    }

    let store = pairing_store(&args.pairings.key_phrase);
    let pairing = store.load(&args.pairings.pairings_file).await?;

    for assignment in pairing.iter() {
        println!("{} -> {}", assignment.giver, assignment.recipient);
    }
    Ok(())
}

async fn run_email(args: EmailArgs) -> Result<()> {
    let api_key = credentials::resolve_api_key(args.credentials_file.as_deref())?;

    if !args.sure.sure && !confirm() {
        println!("Aborted.");
        return Ok(());
    }

    let template =
        std::fs::read_to_string(&args.email_template).map_err(|e| SantaError::ConfigError {
            message: format!("Could not read email template {}: {}", args.email_template, e),
        })?;

    let store = pairing_store(&args.pairings.key_phrase);
    let pairing = store.load(&args.pairings.pairings_file).await?;

    let mailer = HttpMailer::new(args.api_endpoint, api_key);
    let dispatcher = Dispatcher::new(mailer, template, args.subject, args.from_email);

    let summary = dispatcher.dispatch(&pairing).await;
    println!("✅ Sent {} of {} assignment emails", summary.sent, summary.total());
    for (recipient, reason) in &summary.failed {
        eprintln!("❌ {}: {}", recipient, reason);
    }
    summary.into_result().map(|_| ())
}

fn pairing_store(key_phrase: &str) -> PairingStore<LocalStorage> {
    PairingStore::new(LocalStorage::new(".".to_string()), XorCodec::new(key_phrase))
}

fn confirm() -> bool {
    print!("are you sure? [y/n] ");
    let _ = std::io::stdout().flush();

    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    answer.trim().eq_ignore_ascii_case("y")
}
