use super::*;
use dama_core::Difficulty;

#[test]
fn config_parses_from_toml() {
    let config: TournamentConfig = toml::from_str(
        r#"
        games_per_match = 20
        difficulty = "expert"
        max_moves_per_game = 150
        "#,
    )
    .unwrap();

    assert_eq!(config.games_per_match, 20);
    assert_eq!(config.max_moves_per_game, 150);

    let mc = config.match_config();
    assert_eq!(mc.num_games, 20);
    assert_eq!(mc.difficulty, Difficulty::Expert);
    assert_eq!(mc.max_moves, 150);
}

#[test]
fn unknown_difficulty_falls_back_to_normal() {
    let config = TournamentConfig {
        difficulty: "nightmare".to_string(),
        ..Default::default()
    };
    assert_eq!(config.match_config().difficulty, Difficulty::Normal);
}

#[test]
fn report_lists_every_match() {
    let mut results = TournamentResults::new(
        "smoke",
        vec!["minimax".to_string(), "random".to_string()],
        TournamentConfig::default(),
    );
    results.add_match(
        "minimax",
        "random",
        MatchResult {
            wins: 9,
            losses: 0,
            draws: 1,
        },
    );

    let report = results.generate_report();
    assert!(report.contains("smoke"));
    assert!(report.contains("minimax"));
    assert!(report.contains("random"));
    assert!(report.contains('9'));
}
