pub mod cli;
pub mod credentials;

use crate::core::codec::DEFAULT_KEY_PHRASE;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_email_address, validate_non_empty_string, validate_path, validate_url, Validate,
};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "secret-santa")]
#[command(about = "Utilities for managing a Secret Santa event")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate a set of pairings and write them out obfuscated
    Gen(GenArgs),
    /// Decode and display the pairings file (asks for confirmation)
    Display(DisplayArgs),
    /// Send out emails with the assignments (asks for confirmation)
    Email(EmailArgs),
}

#[derive(Debug, Clone, Args)]
pub struct PairingsArgs {
    #[arg(
        short = 'p',
        long = "pairings",
        default_value = "pairings.encrypted",
        help = "File holding the obfuscated set of pairings"
    )]
    pub pairings_file: String,

    #[arg(
        long,
        default_value = DEFAULT_KEY_PHRASE,
        help = "Key phrase for the on-disk obfuscation"
    )]
    pub key_phrase: String,
}

#[derive(Debug, Clone, Args)]
pub struct SureArgs {
    #[arg(short = 'y', help = "Yes, I am sure")]
    pub sure: bool,
}

#[derive(Debug, Clone, Args)]
pub struct GenArgs {
    #[command(flatten)]
    pub pairings: PairingsArgs,

    #[arg(
        short = 'n',
        long = "names",
        default_value = "names.txt",
        help = "CSV file with one name,email row per participant"
    )]
    pub names_file: String,

    #[arg(
        short = 'b',
        long = "blacklist",
        default_value = "blacklist.txt",
        help = "CSV file with one name,name forbidden pair per row (OK if not present)"
    )]
    pub blacklist_file: String,
}

#[derive(Debug, Clone, Args)]
pub struct DisplayArgs {
    #[command(flatten)]
    pub pairings: PairingsArgs,

    #[command(flatten)]
    pub sure: SureArgs,
}

#[derive(Debug, Clone, Args)]
pub struct EmailArgs {
    #[command(flatten)]
    pub pairings: PairingsArgs,

    #[command(flatten)]
    pub sure: SureArgs,

    #[arg(
        short = 'e',
        long = "email-template",
        default_value = "email-template.txt",
        help = "Body template with {user_name} and {target_name} placeholders"
    )]
    pub email_template: String,

    #[arg(
        short = 's',
        long = "subject",
        default_value = "Secret Santa Assignment",
        help = "Subject line for the assignment emails"
    )]
    pub subject: String,

    #[arg(
        short = 'f',
        long = "from",
        help = "From address for the assignment emails"
    )]
    pub from_email: String,

    #[arg(long = "api-endpoint", help = "HTTP send endpoint of the mail API")]
    pub api_endpoint: String,

    #[arg(
        long = "credentials-file",
        help = "TOML credentials file checked when SANTA_MAIL_API_KEY is unset"
    )]
    pub credentials_file: Option<String>,
}

impl Validate for Cli {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Gen(args) => {
                validate_path("pairings", &args.pairings.pairings_file)?;
                validate_path("names", &args.names_file)?;
                validate_path("blacklist", &args.blacklist_file)
            }
            Command::Display(args) => validate_path("pairings", &args.pairings.pairings_file),
            Command::Email(args) => {
                validate_path("pairings", &args.pairings.pairings_file)?;
                validate_path("email-template", &args.email_template)?;
                validate_non_empty_string("subject", &args.subject)?;
                validate_email_address("from", &args.from_email)?;
                validate_url("api-endpoint", &args.api_endpoint)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_defaults_match_the_historical_tool() {
        let cli = Cli::try_parse_from(["secret-santa", "gen"]).unwrap();
        match cli.command {
            Command::Gen(args) => {
                assert_eq!(args.names_file, "names.txt");
                assert_eq!(args.blacklist_file, "blacklist.txt");
                assert_eq!(args.pairings.pairings_file, "pairings.encrypted");
                assert_eq!(args.pairings.key_phrase, DEFAULT_KEY_PHRASE);
            }
            other => panic!("expected gen, got {:?}", other),
        }
    }

    #[test]
    fn test_display_sure_flag() {
        let cli = Cli::try_parse_from(["secret-santa", "display", "-y"]).unwrap();
        match cli.command {
            Command::Display(args) => assert!(args.sure.sure),
            other => panic!("expected display, got {:?}", other),
        }
    }

    #[test]
    fn test_email_requires_from_and_endpoint() {
        assert!(Cli::try_parse_from(["secret-santa", "email"]).is_err());

        let cli = Cli::try_parse_from([
            "secret-santa",
            "email",
            "-f",
            "santa@example.com",
            "--api-endpoint",
            "https://mail.example.com/send",
        ])
        .unwrap();
        match cli.command {
            Command::Email(args) => {
                assert_eq!(args.subject, "Secret Santa Assignment");
                assert_eq!(args.email_template, "email-template.txt");
                assert!(!args.sure.sure);
            }
            other => panic!("expected email, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_accepts_a_complete_email_command() {
        assert!(cli_validates(&[
            "email",
            "-f",
            "santa@example.com",
            "--api-endpoint",
            "https://mail.example.com/send",
        ]));
    }

    #[test]
    fn test_validation_rejects_bad_endpoint_scheme() {
        assert!(!cli_validates(&[
            "email",
            "-f",
            "santa@example.com",
            "--api-endpoint",
            "ftp://mail.example.com/send",
        ]));
    }

    #[test]
    fn test_validation_rejects_bad_from_address() {
        assert!(!cli_validates(&[
            "email",
            "-f",
            "not-an-address",
            "--api-endpoint",
            "https://mail.example.com/send",
        ]));
    }

    fn cli_validates(tail: &[&str]) -> bool {
        let mut argv = vec!["secret-santa"];
        argv.extend_from_slice(tail);
        Cli::try_parse_from(argv).unwrap().validate().is_ok()
    }
}
