use super::*;

#[test]
fn avatar_url_carries_the_name_and_random_background() {
    let url = avatar_url("Jane");
    assert_eq!(
        url,
        "https://ui-avatars.com/api/?name=Jane&background=random"
    );
}

#[test]
fn avatar_url_routes_the_name_through_the_encoder() {
    // Off-browser the encoder is a pass-through; in the browser build it
    // defers to encodeURIComponent, so a space becomes %20.
    let url = avatar_url("Jane Doe");
    let encoded = browser::encode_uri_component("Jane Doe");
    assert_eq!(
        url,
        format!("https://ui-avatars.com/api/?name={encoded}&background=random")
    );
}
