use super::*;

#[test]
fn test_empty_file_gives_defaults() {
    let config = GameConfig::from_toml("").unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!(config.think_ms, 20_000);
    assert_eq!(config.engine, "alphabeta");
}

#[test]
fn test_full_file() {
    let config = GameConfig::from_toml(
        r#"
        rows = 2
        cols = 4
        first = "computer"
        think_ms = 500
        max_depth = 6
        engine = "random"
        "#,
    )
    .unwrap();
    assert_eq!(config.rows, Some(2));
    assert_eq!(config.cols, Some(4));
    assert_eq!(config.first, Some(FirstPlayer::Computer));
    assert_eq!(config.max_depth, Some(6));

    let limits = config.search_limits();
    assert_eq!(limits.max_depth, Some(6));
    assert_eq!(limits.move_time, Some(Duration::from_millis(500)));
}

#[test]
fn test_unknown_key_is_rejected() {
    assert!(GameConfig::from_toml("depth = 3").is_err());
    assert!(GameConfig::from_toml(r#"first = "nobody""#).is_err());
}

#[test]
fn test_zero_think_time_means_no_deadline() {
    let limits = search_limits(0, None);
    assert_eq!(limits.move_time, None);
    assert_eq!(limits.max_depth, None);
}

#[test]
fn test_first_player_prompt_forms() {
    assert_eq!(FirstPlayer::parse(" Computer "), Some(FirstPlayer::Computer));
    assert_eq!(FirstPlayer::parse("h"), Some(FirstPlayer::Human));
    assert_eq!(FirstPlayer::parse("2"), Some(FirstPlayer::Human));
    assert_eq!(FirstPlayer::parse("maybe"), None);
}

#[test]
fn test_missing_file_names_the_path() {
    let err = GameConfig::load(Path::new("/nonexistent/dots.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/dots.toml"));
}
