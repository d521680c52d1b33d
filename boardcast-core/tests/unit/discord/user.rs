use super::*;

fn user() -> User {
    User {
        id: "1234".into(),
        username: "gamebot".into(),
        avatar: "abcdef".into(),
        discriminator: "0".into(),
    }
}

#[test]
fn avatar_url_hits_the_cdn() {
    assert_eq!(
        user().avatar_url(None),
        "https://cdn.discordapp.com/avatars/1234/abcdef.png"
    );
}

#[test]
fn avatar_url_carries_the_requested_size() {
    assert_eq!(
        user().avatar_url(Some(32)),
        "https://cdn.discordapp.com/avatars/1234/abcdef.png?size=32"
    );
}

#[test]
fn user_deserializes_from_api_json() {
    let user: User = serde_json::from_str(
        r#"{"id":"1234","username":"gamebot","avatar":"abcdef","discriminator":"0","extra":true}"#,
    )
    .unwrap();
    assert_eq!(user.username, "gamebot");
}
