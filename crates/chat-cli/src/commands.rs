use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Register a new account
    Signup {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        /// Birthdate as YYYY-MM-DD
        #[arg(long, value_parser = parse_birthdate)]
        birthdate: Option<NaiveDate>,
        /// Country calling code, without the leading '+'
        #[arg(long, default_value = "1")]
        calling_code: String,
        /// Local phone number
        #[arg(long, default_value = "")]
        phone: String,
        /// Avatar image URI (defaults to the configured placeholder)
        #[arg(long)]
        avatar_uri: Option<String>,
    },

    /// Check an email and password against stored accounts
    Login {
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },

    /// Show the current (most recently registered) profile
    Profile,

    /// List stored accounts without passwords
    List,
}

fn parse_birthdate(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got {s:?}: {e}"))
}
