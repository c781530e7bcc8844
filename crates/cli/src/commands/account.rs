//! Auth popup and profile page.

use clap::Subcommand;
use rust_decimal::Decimal;

use jeen_storefront::AppError;
use jeen_storefront::models::CurrentUser;
use jeen_storefront::services::{AuthError, AuthResponse, ProfileUpdate, SignUp};

use super::{Site, to_json};
use crate::Format;

#[derive(Subcommand)]
pub enum AccountAction {
    /// Create an account and log in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log in to an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// End the session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Edit the profile of the logged-in user; omitted fields keep their value
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        bmr: Option<Decimal>,
    },
}

/// Run an account action.
pub fn run(site: &Site, action: AccountAction, format: Format) -> Result<String, AppError> {
    let auth = site.auth();

    match action {
        AccountAction::Signup {
            name,
            email,
            password,
        } => {
            let result = auth.sign_up(SignUp {
                full_name: name,
                email: email.trim().to_owned(),
                password: password.trim().to_owned(),
            });
            welcome(result, format)
        }
        AccountAction::Login { email, password } => {
            let result = auth.log_in(email.trim(), password.trim());
            welcome(result, format)
        }
        AccountAction::Logout => {
            auth.sign_out()?;
            match format {
                Format::Json => to_json(&AuthResponse::ok()),
                _ => Ok("Logged out.".to_string()),
            }
        }
        AccountAction::Whoami => {
            let user = auth.current_user()?;
            match (format, user) {
                (Format::Json, user) => to_json(&user),
                (_, Some(user)) => Ok(format!("{} <{}>", user.full_name, user.email)),
                (_, None) => Ok("Not logged in.".to_string()),
            }
        }
        AccountAction::Update {
            name,
            email,
            phone,
            location,
            bmr,
        } => {
            let current = auth
                .current_user()?
                .ok_or_else(|| AppError::Unauthorized("Log in first.".to_string()))?;
            let profile = site.profile();
            let existing = ProfileUpdate::from_account(&profile.load(&current)?);

            let update = ProfileUpdate {
                full_name: name.unwrap_or(existing.full_name),
                email: email.unwrap_or(existing.email),
                phone: phone.unwrap_or(existing.phone),
                location: location.unwrap_or(existing.location),
                bmr: bmr.or(existing.bmr),
            };
            let (account, user) = profile.update(&current, update)?;

            match format {
                Format::Json => to_json(&user),
                _ => Ok(format!(
                    "Profile saved.\nName: {}\nEmail: {}\nPhone: {}\nLocation: {}\nBMR: {}",
                    account.full_name,
                    account.email,
                    account.profile.phone,
                    account.profile.location,
                    account.bmr.map_or_else(|| "-".to_string(), |bmr| bmr.to_string())
                )),
            }
        }
    }
}

/// Render a login or sign-up outcome.
///
/// With `--json` failures are reported as the popup's tagged response rather
/// than as an error exit.
fn welcome(result: Result<CurrentUser, AuthError>, format: Format) -> Result<String, AppError> {
    if format == Format::Json {
        return to_json(&AuthResponse::from(result));
    }
    let user = result?;
    Ok(format!("Welcome, {}.", user.full_name))
}
