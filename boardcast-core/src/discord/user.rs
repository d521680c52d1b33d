//! Discord user lookup and avatar download.

use crate::foundation::error::{BoardcastError, BoardcastResult};

/// Environment variable holding the bot token used for API requests.
pub const BOT_TOKEN_ENV: &str = "DISCORD_BOT_TOKEN";

fn bot_token() -> BoardcastResult<String> {
    std::env::var(BOT_TOKEN_ENV).map_err(|_| {
        BoardcastError::resource(format!(
            "could not find the {BOT_TOKEN_ENV} environment variable"
        ))
    })
}

/// A Discord user, as returned by the `users/{id}` endpoint.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct User {
    /// Snowflake id.
    pub id: String,
    /// Account name.
    pub username: String,
    /// Avatar hash used to build the CDN URL.
    pub avatar: String,
    /// Legacy discriminator ("0" for migrated accounts).
    pub discriminator: String,
}

impl User {
    /// Fetch a user's information from Discord by id.
    pub fn get(user_id: &str) -> BoardcastResult<Self> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .get(format!("https://discord.com/api/v10/users/{user_id}"))
            .header("Authorization", format!("Bot {}", bot_token()?))
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| {
                BoardcastError::resource(format!("failed to look up Discord user {user_id}: {e}"))
            })?;
        response.json().map_err(|e| {
            BoardcastError::resource(format!(
                "unexpected Discord response for user {user_id}: {e}"
            ))
        })
    }

    /// URL at `cdn.discordapp.com` where the user's avatar can be fetched.
    pub fn avatar_url(&self, size: Option<u32>) -> String {
        let mut url = format!(
            "https://cdn.discordapp.com/avatars/{}/{}.png",
            self.id, self.avatar
        );
        if let Some(size) = size {
            url.push_str(&format!("?size={size}"));
        }
        url
    }

    /// Download the user's current avatar as encoded image bytes.
    pub fn fetch_avatar(&self, size: Option<u32>) -> BoardcastResult<Vec<u8>> {
        let response = reqwest::blocking::get(self.avatar_url(size))
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| {
                BoardcastError::resource(format!(
                    "failed to fetch avatar for Discord user {}: {e}",
                    self.id
                ))
            })?;
        let bytes = response.bytes().map_err(|e| {
            BoardcastError::resource(format!(
                "failed to read avatar bytes for Discord user {}: {e}",
                self.id
            ))
        })?;
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/discord/user.rs"]
mod tests;
