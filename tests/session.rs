use rand::SeedableRng;
use rand::rngs::StdRng;

use depth_chart_guess::depth_chart::{DepthChart, DepthEntry, TeamDepthChart};
use depth_chart_guess::error::SessionError;
use depth_chart_guess::hint::{Hint, HintLevel, Side};
use depth_chart_guess::player::Player;
use depth_chart_guess::position::{PositionCategory, filter_by_position};
use depth_chart_guess::session::{GameSession, GuessOutcome, MAX_ATTEMPTS, RoundPhase};

fn seeded(seed: u64) -> GameSession<StdRng> {
    GameSession::with_rng(StdRng::seed_from_u64(seed))
}

fn roster() -> Vec<Player> {
    vec![
        Player::new("QB", "Tom Brady"),
        Player::new("WR1", "Jerry Rice"),
        Player::new("WR2", "Randy Moss"),
        Player::new("RB", "Barry Sanders"),
        Player::new("LB", "Ray Lewis"),
    ]
}

fn single(player: Player) -> GameSession<StdRng> {
    let mut session = seeded(7);
    session.start_with(vec![player.clone()], vec![player]);
    session
}

#[test]
fn start_picks_valid_index_and_resets_counters() {
    for seed in 0..50 {
        let mut session = seeded(seed);
        session.load_players(roster());
        assert_eq!(session.phase(), RoundPhase::Active);
        assert!(session.current_index() < session.filtered_players().len());
        assert_eq!(session.attempts(), 0);
        assert_eq!(session.hint_level(), HintLevel::Side);

        session.change_category(PositionCategory::WideReceiver);
        assert_eq!(session.filtered_players().len(), 2);
        assert!(session.current_index() < 2);
        let target = session.current_player().expect("round active");
        assert!(target.position.starts_with("WR"));
    }
}

#[test]
fn guesses_are_case_insensitive() {
    let target = Player::new("QB", "Tom Brady");
    let mut upper = single(target.clone());
    let mut lower = single(target.clone());
    let a = upper.submit_guess("Tom Brady").expect("active round");
    let b = lower.submit_guess("tom brady").expect("active round");
    assert_eq!(a, b);
    assert_eq!(
        a.message(),
        "Correct! The player's name is Tom Brady. Position: QB"
    );
}

#[test]
fn loss_fires_on_eighth_wrong_guess() {
    let mut session = single(Player::new("RB1", "Barry Sanders"));
    for n in 1..MAX_ATTEMPTS {
        let outcome = session.submit_guess("Emmitt Smith").expect("active round");
        assert_eq!(
            outcome,
            GuessOutcome::Incorrect {
                attempts_left: MAX_ATTEMPTS - n
            }
        );
        assert_eq!(outcome.message(), "Incorrect. Try again!");
        assert_eq!(session.attempts(), n);
    }

    let outcome = session.submit_guess("Emmitt Smith").expect("active round");
    assert_eq!(
        outcome.message(),
        "Game over! The player's name is Barry Sanders. Position: RB1"
    );
    assert!(outcome.ends_round());
    assert_eq!(session.phase(), RoundPhase::Active);
    assert_eq!(session.attempts(), 0);
}

#[test]
fn correct_guess_on_last_attempt_wins() {
    let mut session = single(Player::new("WR1", "Jerry Rice"));
    for _ in 1..MAX_ATTEMPTS {
        session.submit_guess("nope").expect("active round");
    }
    let outcome = session.submit_guess("JERRY RICE").expect("active round");
    assert!(matches!(outcome, GuessOutcome::Correct { .. }));
}

#[test]
fn round_end_resets_hints() {
    let chart = DepthChart::default();
    let mut session = single(Player::new("QB", "Tom Brady"));
    session.request_hint(&chart).expect("active round");
    session.request_hint(&chart).expect("active round");
    assert_eq!(session.hint_level(), HintLevel::DepthOrder);
    session.submit_guess("tom brady").expect("active round");
    assert_eq!(session.hint_level(), HintLevel::Side);
    assert_eq!(session.attempts(), 0);
}

#[test]
fn hints_advance_then_repeat_depth_order() {
    let chart = DepthChart {
        teams: vec![TeamDepthChart {
            team_id: Some(8),
            offense: vec![DepthEntry::new("RB1", "Barry Sanders")],
            defense: Vec::new(),
        }],
    };
    let mut session = single(Player::new("RB1", "Barry Sanders"));

    assert_eq!(session.request_hint(&chart), Ok(Hint::Side(Side::Defense)));
    assert_eq!(
        session.request_hint(&chart),
        Ok(Hint::Position("RB1".to_string()))
    );
    let third = session.request_hint(&chart).expect("active round");
    assert_eq!(third, Hint::DepthOrder(Some(1)));
    assert_eq!(third.to_string(), "1");
    assert_eq!(session.request_hint(&chart), Ok(Hint::DepthOrder(Some(1))));
    assert_eq!(session.attempts(), 0);
}

#[test]
fn empty_category_falls_back_to_full_shuffled_pool() {
    let players = vec![
        Player::new("QB", "Tom Brady"),
        Player::new("WR1", "Jerry Rice"),
        Player::new("LB", "Ray Lewis"),
    ];
    let mut session = seeded(3);
    session.load_players(players.clone());
    session.change_category(PositionCategory::RunningBack);

    assert_eq!(session.phase(), RoundPhase::Active);
    let mut pool = session.filtered_players().to_vec();
    assert_eq!(pool.len(), players.len());
    assert_eq!(session.all_players(), session.filtered_players());
    pool.sort_by(|a, b| a.name.cmp(&b.name));
    let mut expected = players;
    expected.sort_by(|a, b| a.name.cmp(&b.name));
    assert_eq!(pool, expected);
}

#[test]
fn start_with_empty_filter_uses_all_players() {
    let mut session = seeded(11);
    let players = roster();
    let filtered = filter_by_position(&players, PositionCategory::RunningBack);
    session.start_with(players.clone(), Vec::new());
    assert_eq!(session.filtered_players().len(), players.len());
    session.start_with(players, filtered);
    assert_eq!(session.filtered_players().len(), 1);
    assert_eq!(
        session.current_player(),
        Some(&Player::new("RB", "Barry Sanders"))
    );
}

#[test]
fn empty_pool_stays_idle_and_reports_invalid_index() {
    let mut session = seeded(1);
    session.load_players(Vec::new());
    assert_eq!(session.phase(), RoundPhase::Idle);
    assert!(session.current_player().is_none());

    let err = session.submit_guess("anyone").unwrap_err();
    assert_eq!(err, SessionError::InvalidIndex { index: 0, len: 0 });
    assert_eq!(session.attempts(), 1);
    assert!(session.request_hint(&DepthChart::default()).is_err());
}

#[test]
fn replaced_pool_is_guarded() {
    let mut session = single(Player::new("QB", "Tom Brady"));
    session.replace_filtered_players(Vec::new());
    let err = session.submit_guess("Tom Brady").unwrap_err();
    assert!(matches!(err, SessionError::InvalidIndex { len: 0, .. }));
    assert_eq!(session.attempts(), 1);
    assert_eq!(session.hint_level(), HintLevel::Side);
    assert_eq!(session.phase(), RoundPhase::Active);
}
