use anyhow::Result;
use faceit_relay::models::{
    event::InboundEvent, match_detail::MatchDetail, notification::MatchSummary,
};
use serde_json::json;

fn sample_event(event_name: &str, timestamp: &str) -> InboundEvent {
    serde_json::from_value(json!({
        "event": event_name,
        "payload": { "id": "1-abc" },
        "timestamp": timestamp,
    }))
    .unwrap()
}

fn sample_detail(detail: serde_json::Value) -> MatchDetail {
    serde_json::from_value(detail).unwrap()
}

/// Test: Projection copies entity, team names, rosters, and the map pick
#[test]
fn test_projection_of_full_match_detail() -> Result<()> {
    let event = sample_event("match_status_ready", "2024-07-08T12:30:00Z");
    let detail = sample_detail(json!({
        "entity": { "name": "Pro League" },
        "teams": {
            "faction1": {
                "name": "Alpha",
                "roster": [
                    { "nickname": "ace", "game_skill_level": 10, "player_id": "p1" },
                    { "nickname": "bob", "game_skill_level": 4, "player_id": "p2" },
                ],
            },
            "faction2": {
                "name": "Bravo",
                "roster": [
                    { "nickname": "cat", "game_skill_level": 7, "player_id": "p3" },
                ],
            },
        },
        "voting": { "map": { "pick": ["de_mirage"] } },
    }));

    let summary = MatchSummary::new(&event, &detail);

    assert_eq!(summary.entity_name, "Pro League");
    assert_eq!(summary.teams[0].name, "Alpha");
    assert_eq!(summary.teams[1].name, "Bravo");
    assert_eq!(summary.teams[0].players.len(), 2);
    assert_eq!(summary.teams[0].players[1].nickname, "bob");
    assert_eq!(summary.teams[0].players[1].skill_level, 4);
    assert_eq!(summary.teams[1].players[0].player_id, "p3");
    assert_eq!(summary.map_pick, "de_mirage");

    Ok(())
}

/// Test: Missing entity and map vote fall back to the N/A placeholder
#[test]
fn test_projection_fallbacks() -> Result<()> {
    let event = sample_event("match_status_finished", "2024-07-08T12:30:00Z");
    let detail = sample_detail(json!({
        "teams": {
            "faction1": { "name": "Alpha", "roster": [] },
            "faction2": { "name": "Bravo", "roster": [] },
        },
    }));

    let summary = MatchSummary::new(&event, &detail);

    assert_eq!(summary.entity_name, "N/A");
    assert_eq!(summary.map_pick, "N/A");

    Ok(())
}

/// Test: An empty pick list is treated the same as no map vote at all
#[test]
fn test_empty_map_pick_falls_back() -> Result<()> {
    let event = sample_event("match_status_finished", "2024-07-08T12:30:00Z");
    let detail = sample_detail(json!({
        "teams": {
            "faction1": { "name": "Alpha", "roster": [] },
            "faction2": { "name": "Bravo", "roster": [] },
        },
        "voting": { "map": { "pick": [] } },
    }));

    let summary = MatchSummary::new(&event, &detail);

    assert_eq!(summary.map_pick, "N/A");

    Ok(())
}

/// Test: Embed layout matches the notification contract
#[test]
fn test_embed_construction() -> Result<()> {
    let event = sample_event("match_status_finished", "2024-07-08T12:30:00Z");
    let detail = sample_detail(json!({
        "entity": { "name": "Hub" },
        "teams": {
            "faction1": {
                "name": "Alpha",
                "roster": [
                    { "nickname": "ace", "game_skill_level": 10, "player_id": "p1" },
                ],
            },
            "faction2": {
                "name": "Bravo",
                "roster": [
                    { "nickname": "cat", "game_skill_level": 12, "player_id": "p3" },
                ],
            },
        },
        "voting": { "map": { "pick": ["de_nuke", "de_inferno"] } },
    }));

    let summary = MatchSummary::new(&event, &detail);
    let message = summary.to_discord_message("1-abc", &event.timestamp);

    assert_eq!(message.embeds.len(), 1);
    let embed = &message.embeds[0];

    assert_eq!(embed.title, "Match finished");
    assert_eq!(
        embed.description,
        "[Match Link](https://www.faceit.com/en/cs2/room/1-abc)"
    );
    assert_eq!(embed.color, 0xFF0000);
    assert!(embed.timestamp.is_some(), "RFC 3339 timestamp should parse");

    assert_eq!(embed.fields.len(), 7);
    assert_eq!(embed.fields[0].value, "**__Hub__**");
    assert_eq!(embed.fields[1].value, "Alpha");
    assert_eq!(embed.fields[2].value, "Bravo");

    // Level 10 renders with its badge, the out-of-range level 12 without one
    assert!(embed.fields[4].value.contains("<:faceit10:"));
    assert_eq!(embed.fields[5].value, "cat");

    // First pick wins
    assert_eq!(embed.fields[6].value, "de_nuke");

    Ok(())
}

/// Test: An unparseable event timestamp omits the embed timestamp
#[test]
fn test_invalid_timestamp_is_omitted() -> Result<()> {
    let event = sample_event("match_status_ready", "not-a-timestamp");
    let detail = sample_detail(json!({
        "teams": {
            "faction1": { "name": "Alpha", "roster": [] },
            "faction2": { "name": "Bravo", "roster": [] },
        },
    }));

    let summary = MatchSummary::new(&event, &detail);
    let message = summary.to_discord_message("1-abc", &event.timestamp);

    assert_eq!(message.embeds[0].timestamp, None);

    let serialized = serde_json::to_value(&message)?;
    assert!(
        serialized["embeds"][0].get("timestamp").is_none(),
        "Absent timestamp should be skipped during serialization"
    );

    Ok(())
}
