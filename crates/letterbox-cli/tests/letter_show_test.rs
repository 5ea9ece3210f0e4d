use letterbox_testing::assertions::assert_badge_level;
use letterbox_testing::{TestWorld, fixtures};

fn world_as(viewer: &str) -> TestWorld {
    TestWorld::new()
        .with_letters(&fixtures::sample_mailbox())
        .with_viewer(viewer)
}

#[test]
fn test_pending_letter_is_sealed_for_recipient() {
    let world = world_as("bob");
    let result = world.run_json(&["letter", "show", "birthday"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    let letter = &json["content"]["letter"];
    assert_badge_level(&json, "info").unwrap();
    assert_eq!(json["badge"]["label"], "On its way");
    assert_eq!(letter["sealed"], true);
    assert!(letter["content"].is_null());
    assert_eq!(letter["template"], "composed_for_viewer");
    assert_eq!(
        letter["description"],
        "carol composed this for you, arriving in 3 ☀️ 🌙"
    );
}

#[test]
fn test_sender_reads_own_pending_letter() {
    let world = world_as("alice");
    let json = world
        .run_json(&["letter", "show", "tomorrow"])
        .unwrap()
        .json()
        .unwrap();
    let letter = &json["content"]["letter"];

    assert_eq!(json["badge"]["label"], "Scheduled");
    assert_eq!(letter["sealed"], false);
    assert_eq!(letter["content"], "Breakfast at eight.");
    assert_eq!(letter["template"], "composed_by_viewer");
    assert_eq!(letter["description"], "You composed this for bob, arriving in 1 ☀️");
}

#[test]
fn test_delivered_letter_from_both_sides() {
    let as_sender = world_as("bob")
        .run_json(&["letter", "show", "reply"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(
        as_sender["content"]["letter"]["description"],
        "You composed this for alice, delivered 2 days ago"
    );

    let as_recipient = world_as("alice")
        .run_json(&["letter", "show", "reply"])
        .unwrap()
        .json()
        .unwrap();
    let letter = &as_recipient["content"]["letter"];
    assert_badge_level(&as_recipient, "success").unwrap();
    assert_eq!(letter["description"], "bob composed this for you, delivered 2 days ago");
    assert_eq!(letter["content"], "It made my day.");
    assert_eq!(letter["is_sender"], false);
}

#[test]
fn test_elapsed_anchor_from_config() {
    let world = world_as("bob").with_config("elapsed_anchor = \"created\"\n");
    let json = world
        .run_json(&["letter", "show", "capsule"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(
        json["content"]["letter"]["delivery"]["display_duration"],
        "1 year ago"
    );
}

#[test]
fn test_plain_detail() {
    let world = world_as("bob");
    let result = world.run(&["letter", "show", "capsule"]).unwrap();
    assert!(result.success());

    let out = result.stdout();
    assert!(out.contains("Delivered"));
    assert!(out.contains("Open me next year"));
    assert!(out.contains("alice composed this for you, delivered 1 hour ago"));
    assert!(out.contains("2026-01-15 11:00 UTC"));
    assert!(out.contains("Hello from last January."));
    assert!(out.contains("letterbox letter delete capsule"));
}

#[test]
fn test_plain_sealed_detail_hides_body() {
    let result = world_as("bob").run(&["letter", "show", "birthday"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("Sealed until it arrives."));
    assert!(!result.stdout().contains("Many happy returns."));
}

#[test]
fn test_unknown_letter_is_not_found() {
    let world = world_as("bob");
    let result = world.run_json(&["letter", "show", "nope"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Letter not found: nope"));

    let json = result.json().unwrap();
    assert_badge_level(&json, "error").unwrap();
    assert_eq!(json["content"]["letter_id"], "nope");
}

#[test]
fn test_letters_of_others_look_missing() {
    let result = world_as("bob").run(&["letter", "show", "elsewhere"]).unwrap();
    assert!(!result.success());
    assert!(result.stdout().contains("Letter not found"));
    assert!(!result.stdout().contains("Private."));
}
