use clap::Parser;
use uuid::Uuid;

use journal_api::auth;
use journal_api::config;

/// Development helper that stands in for the external identity provider:
/// signs a bearer token the API will accept, using the configured secret.
#[derive(Parser)]
#[command(name = "journal-token")]
#[command(about = "Sign a development bearer token for the Journal API")]
#[command(version)]
struct Cli {
    #[arg(long, help = "User id for the token subject; random v4 when omitted")]
    user: Option<Uuid>,

    #[arg(long, help = "Validity in hours; defaults to the configured expiry")]
    expires_in_hours: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let security = &config::config().security;

    let user = cli.user.unwrap_or_else(Uuid::new_v4);
    let hours = cli.expires_in_hours.unwrap_or(security.jwt_expiry_hours);

    let token = auth::issue_token(user, &security.jwt_secret, hours)?;

    // Token on stdout so it pipes cleanly into curl; context on stderr
    eprintln!("subject: {}", user);
    println!("{}", token);

    Ok(())
}
