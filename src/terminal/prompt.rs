//! Login prompt
//!
//! Reads identifier, secret and remember flag line by line and reports
//! each attempt's outcome.

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::auth::{CredentialValidator, IdentityTable};
use crate::config::RouteConfig;
use crate::error::AppError;
use crate::form::{LoginForm, SubmitOutcome};

/// Interactive login over a line reader and a writer.
pub struct LoginPrompt<'a> {
    validator: &'a CredentialValidator,
    routes: &'a RouteConfig,
    show_demo_accounts: bool,
}

impl<'a> LoginPrompt<'a> {
    pub fn new(validator: &'a CredentialValidator, routes: &'a RouteConfig) -> Self {
        Self {
            validator,
            routes,
            show_demo_accounts: false,
        }
    }

    pub fn show_demo_accounts(mut self, show: bool) -> Self {
        self.show_demo_accounts = show;
        self
    }

    /// Prompts until a submission resolves or input ends.
    ///
    /// Returns the `Navigate` outcome on success and `None` if the reader
    /// hits EOF first.
    pub async fn run<R, W>(
        &self,
        mut reader: R,
        writer: &mut W,
    ) -> Result<Option<SubmitOutcome>, AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        writer.write_all(b"Welcome to CorteYa\n").await?;
        if self.show_demo_accounts {
            let panel = render_demo_accounts(self.validator.identities());
            writer.write_all(panel.as_bytes()).await?;
        }
        writer.flush().await?;

        let mut form = LoginForm::new();
        let mut attempts = 0usize;

        loop {
            let Some(identifier) = read_field(&mut reader, writer, "identifier: ").await? else {
                return Ok(None);
            };
            let Some(secret) = read_field(&mut reader, writer, "secret: ").await? else {
                return Ok(None);
            };
            let Some(remember) = read_field(&mut reader, writer, "remember me? [y/N]: ").await?
            else {
                return Ok(None);
            };

            form.set_identifier(identifier);
            form.set_secret(secret);
            form.set_remember(parse_yes(&remember));

            attempts += 1;
            let outcome = form.submit(self.validator, self.routes);
            debug!("Attempt {} finished in state {:?}", attempts, form.state());

            match &outcome {
                SubmitOutcome::Navigate {
                    role,
                    destination,
                    remember,
                } => {
                    let msg = format!(
                        "Signed in as {} (remember: {}). Continuing to {}\n",
                        role,
                        if *remember { "yes" } else { "no" },
                        destination
                    );
                    writer.write_all(msg.as_bytes()).await?;
                    writer.flush().await?;
                    info!("Login completed after {} attempt(s)", attempts);
                    return Ok(Some(outcome));
                }
                SubmitOutcome::ShowFieldErrors(errors) => {
                    for (field, error) in errors.iter() {
                        let msg = format!("  {}: {}\n", field, error);
                        writer.write_all(msg.as_bytes()).await?;
                    }
                }
                SubmitOutcome::ShowGeneralError(message) => {
                    let msg = format!("  {}\n", message);
                    writer.write_all(msg.as_bytes()).await?;
                }
            }
            writer.flush().await?;
        }
    }
}

/// Text panel listing the accounts that can sign in.
pub fn render_demo_accounts(identities: &IdentityTable) -> String {
    let mut panel = String::from("Demo accounts:\n");
    for entry in identities.demo_accounts() {
        panel.push_str(&format!(
            "  {:<9} {} / {}\n",
            entry.role, entry.identifier, entry.secret
        ));
    }
    panel
}

/// Writes `label` and reads one line, without its line ending.
/// `None` means the reader is exhausted.
async fn read_field<R, W>(
    reader: &mut R,
    writer: &mut W,
    label: &str,
) -> Result<Option<String>, AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(label.as_bytes()).await?;
    writer.flush().await?;

    let mut line = String::new();
    let n = reader.read_line(&mut line).await?;
    if n == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn parse_yes(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use tokio::io::BufReader;

    async fn run_with(input: &str) -> (Option<SubmitOutcome>, String) {
        let validator = CredentialValidator::default();
        let routes = RouteConfig::default();
        let prompt = LoginPrompt::new(&validator, &routes);
        let mut output = Vec::new();

        let outcome = prompt
            .run(BufReader::new(input.as_bytes()), &mut output)
            .await
            .unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn admin_login_navigates_to_admin() {
        let (outcome, output) = run_with("admin@corteya.com\nadmin123\ny\n").await;
        assert_eq!(
            outcome,
            Some(SubmitOutcome::Navigate {
                role: Role::Admin,
                destination: "/admin".to_string(),
                remember: true,
            })
        );
        assert!(output.contains("Continuing to /admin"));
    }

    #[tokio::test]
    async fn errors_are_printed_and_prompt_repeats() {
        let input = "not-an-email\n123\n\nadmin@corteya.com\nwrong-secret\nn\npropietario@corteya.com\nbarbero123\r\nn\r\n";
        let (outcome, output) = run_with(input).await;

        assert!(output.contains("  identifier: identifier must be a valid email-like value\n"));
        assert!(output.contains("  secret: secret must be at least 6 characters\n"));
        assert!(output.contains("credentials incorrect, verify your identifier and secret."));
        assert_eq!(
            outcome,
            Some(SubmitOutcome::Navigate {
                role: Role::Business,
                destination: "/dashboard".to_string(),
                remember: false,
            })
        );
    }

    #[tokio::test]
    async fn eof_before_sign_in_returns_none() {
        let (outcome, _) = run_with("admin@corteya.com\n").await;
        assert_eq!(outcome, None);
    }

    #[tokio::test]
    async fn demo_panel_is_optional() {
        let validator = CredentialValidator::default();
        let routes = RouteConfig::default();
        let mut output = Vec::new();
        LoginPrompt::new(&validator, &routes)
            .show_demo_accounts(true)
            .run(BufReader::new(&b""[..]), &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("admin@corteya.com / admin123"));
        assert!(output.contains("propietario@corteya.com / barbero123"));
    }

    #[test]
    fn parse_yes_accepts_common_forms() {
        assert!(parse_yes("y"));
        assert!(parse_yes(" YES "));
        assert!(!parse_yes(""));
        assert!(!parse_yes("n"));
    }
}
