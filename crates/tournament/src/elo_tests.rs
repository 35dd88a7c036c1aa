use super::*;

#[test]
fn equal_ratings_expect_an_even_score() {
    let standings = Standings::new();
    let expected = standings.expected_score("engine1", "engine2");
    assert!((expected - 0.5).abs() < 0.001);
}

#[test]
fn winning_a_match_moves_ratings_apart() {
    let mut standings = Standings::new();

    let result = MatchResult {
        wins: 10,
        losses: 0,
        draws: 0,
    };
    standings.update_ratings("engine1", "engine2", &result);

    assert!(standings.rating("engine1") > DEFAULT_ELO);
    assert!(standings.rating("engine2") < DEFAULT_ELO);
    assert_eq!(standings.games_played("engine1"), 10);
    assert_eq!(standings.games_played("engine2"), 10);
}

#[test]
fn drawn_match_between_unknowns_changes_nothing() {
    let mut standings = Standings::new();

    let result = MatchResult {
        wins: 2,
        losses: 2,
        draws: 6,
    };
    standings.update_ratings("a", "b", &result);

    assert!((standings.rating("a") - DEFAULT_ELO).abs() < 0.001);
    assert!((standings.rating("b") - DEFAULT_ELO).abs() < 0.001);
}

#[test]
fn leaderboard_sorts_strongest_first() {
    let mut standings = Standings::new();
    standings.update_ratings(
        "strong",
        "weak",
        &MatchResult {
            wins: 8,
            losses: 1,
            draws: 1,
        },
    );

    let board = standings.leaderboard();
    assert_eq!(board.len(), 2);
    assert_eq!(board[0].0, "strong");
    assert!(board[0].1.rating > board[1].1.rating);
}

#[test]
fn match_result_score_counts_draws_as_half() {
    let result = MatchResult {
        wins: 3,
        losses: 1,
        draws: 2,
    };
    assert_eq!(result.total_games(), 6);
    assert!((result.score() - (3.0 + 1.0) / 6.0).abs() < 1e-9);

    // An empty result reads as even rather than dividing by zero
    assert_eq!(MatchResult::new().score(), 0.5);
}
