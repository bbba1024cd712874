use faceit_relay::models::badge::skill_badge;

/// Test: Every skill level 1-10 maps to its own FACEIT emoji token
#[test]
fn test_all_ten_levels_have_badges() {
    for level in 1..=10 {
        let badge = skill_badge(level)
            .unwrap_or_else(|| panic!("Level {} should have a badge", level));

        assert!(
            badge.starts_with(&format!("<:faceit{}:", level)),
            "Badge for level {} should be the faceit{} emoji, got {}",
            level,
            level,
            badge
        );
        assert!(badge.ends_with('>'));
    }
}

/// Test: Badge tokens are distinct across levels
#[test]
fn test_badges_are_unique() {
    let badges: Vec<_> = (1..=10).map(|level| skill_badge(level).unwrap()).collect();

    for (i, badge) in badges.iter().enumerate() {
        assert_eq!(
            badges.iter().filter(|other| *other == badge).count(),
            1,
            "Badge for level {} should be unique",
            i + 1
        );
    }
}

/// Test: Out-of-range levels deterministically map to no badge
#[test]
fn test_out_of_range_levels_have_no_badge() {
    assert_eq!(skill_badge(0), None);
    assert_eq!(skill_badge(11), None);
    assert_eq!(skill_badge(-1), None);
    assert_eq!(skill_badge(i64::MAX), None);
}
