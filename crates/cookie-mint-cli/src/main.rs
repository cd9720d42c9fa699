use clap::Parser;
use cookie_mint::{set_cookie_header, CookieOptions, DomainPolicy};

#[derive(Parser)]
#[command(
    name = "cookie-mint",
    about = "Build an HTTP cookie and print it as JSON or a Set-Cookie header line"
)]
struct Cli {
    /// Cookie name (must not be empty)
    #[arg(long)]
    name: String,

    /// Cookie value
    #[arg(long, default_value = "")]
    value: String,

    /// Cookie domain; normalized to leading-dot form before use
    #[arg(long)]
    domain: Option<String>,

    /// What to do when the domain is rejected (keep, clear, fail)
    #[arg(long, default_value = "fail")]
    domain_policy: String,

    /// Cookie path
    #[arg(long, default_value = "/")]
    path: String,

    /// Expiration as Unix seconds
    #[arg(long)]
    expires_at: Option<i64>,

    /// Expiration as seconds from now (overrides --expires-at)
    #[arg(long)]
    expires_in: Option<i64>,

    /// Mark the cookie Secure
    #[arg(long)]
    secure: bool,

    /// Mark the cookie HttpOnly
    #[arg(long)]
    http_only: bool,

    /// Output as a Set-Cookie header line instead of JSON
    #[arg(long)]
    header: bool,
}

fn main() {
    let cli = Cli::parse();

    let policy = match DomainPolicy::from_str_loose(&cli.domain_policy) {
        Some(policy) => policy,
        None => {
            eprintln!("error: unknown domain policy: {}", cli.domain_policy);
            std::process::exit(2);
        }
    };

    let mut options = CookieOptions::new(&cli.name)
        .value(&cli.value)
        .path(&cli.path)
        .domain_policy(policy)
        .secure(cli.secure)
        .http_only(cli.http_only);
    if let Some(ref d) = cli.domain {
        options = options.domain(d);
    }
    if let Some(t) = cli.expires_at {
        options = options.expires_at(t);
    }

    let mut cookie = match options.build() {
        Ok(cookie) => cookie,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };
    if let Some(seconds) = cli.expires_in {
        cookie.expires_in(seconds);
    }

    if cli.header {
        println!("{}", set_cookie_header(&cookie));
    } else {
        match serde_json::to_string_pretty(&cookie) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }
}
