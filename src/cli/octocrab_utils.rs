use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};

use super::AuthArgs;

const TOKEN_CREDENTIAL: &str = "github_token";

impl AuthArgs {
    pub(crate) fn try_into_octocrab(self) -> Result<octocrab::Octocrab> {
        // If the token has not been passed via CLI or env, get it as a credential.
        let github_token = match self.github_token {
            Some(token) => SecretString::new(token),
            None => read_credential(TOKEN_CREDENTIAL).with_context(|| {
                format!("no GitHub token given and no `{TOKEN_CREDENTIAL}` credential found")
            })?,
        };
        let mut builder = octocrab::Octocrab::builder()
            // https://github.com/XAMPPRocky/octocrab/issues/594
            .personal_token(github_token.expose_secret().to_owned());
        if let Some(api_url) = self.api_url {
            builder = builder
                .base_uri(api_url.as_str())
                .with_context(|| format!("invalid GitHub API URL {api_url:?}"))?;
        }
        Ok(builder.build()?)
    }
}

/// Read a systemd credential (see <https://systemd.io/CREDENTIALS/>).
fn read_credential(name: &str) -> Result<SecretString> {
    use libsystemd::credentials::CredentialsLoader;
    use std::io::Read;

    let mut file = CredentialsLoader::open()?.get(name)?;
    let mut buffer = String::new();
    file.read_to_string(&mut buffer)?;
    Ok(SecretString::new(buffer.trim_end().to_owned()))
}
