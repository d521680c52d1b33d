//! Tooling for the small part of the Discord API the renderer needs:
//! resolving a user id to an avatar image. Requires the `DISCORD_BOT_TOKEN`
//! environment variable.

pub mod cache;
pub mod user;
