use arcade_model::{
    testing::{MemoryLedger, RejectingLedger},
    ArcadeState, Error, InsertOutcome, Ledger, ScoreEntry,
};

const RESERVE_FLOOR: u64 = 1_000;
const PRICE: u64 = 100;
const ARCADE: &str = "arcade";
const ADMIN: &str = "admin";

fn new_arcade(max_top_scores: u8) -> ArcadeState<&'static str> {
    ArcadeState::initialize(ARCADE, ADMIN, "Super Arcade", max_top_scores, PRICE).unwrap()
}

/// Ledger with the arcade account funded to its reserve floor.
fn new_ledger() -> MemoryLedger {
    let mut ledger = MemoryLedger::new(RESERVE_FLOOR);
    ledger.credit(ARCADE, RESERVE_FLOOR);
    ledger
}

fn entry(score: u64, player: &'static str, nickname: &str) -> ScoreEntry<&'static str> {
    ScoreEntry::new(score, player, nickname).unwrap()
}

#[test]
fn initialize_validates_its_inputs() {
    assert_eq!(
        ArcadeState::initialize(ARCADE, ADMIN, "a", 0, PRICE).unwrap_err(),
        Error::InvalidCapacity
    );
    assert_eq!(
        ArcadeState::initialize(ARCADE, ADMIN, "a", 3, 0).unwrap_err(),
        Error::InvalidPrice
    );
    assert_eq!(
        ArcadeState::initialize(ARCADE, ADMIN, "a".repeat(65), 3, PRICE).unwrap_err(),
        Error::ArcadeNameTooLong
    );

    let arcade = new_arcade(3);
    assert_eq!(arcade.admins().admins(), [ADMIN]);
    assert_eq!(arcade.game_counter(), 0);
    assert_eq!(arcade.total_distributed(), 0);
    assert!(arcade.top_scores().is_empty());
}

#[test]
fn play_accrues_the_full_price_to_the_vault() {
    let mut arcade = new_arcade(3);
    let mut ledger = new_ledger();
    ledger.credit("alice", PRICE * 3);

    arcade.play(&mut ledger, &"alice").unwrap();
    arcade.play(&mut ledger, &"alice").unwrap();

    assert_eq!(arcade.game_counter(), 2);
    assert_eq!(ledger.balance_of("alice"), PRICE);
    assert_eq!(ledger.balance_of(ARCADE), RESERVE_FLOOR + PRICE * 2);
}

// Scenario C: a payer below the price fails and the counter is untouched.
#[test]
fn play_with_insufficient_funds_is_rejected() {
    let mut arcade = new_arcade(3);
    let mut ledger = new_ledger();
    ledger.credit("alice", PRICE - 1);

    assert_eq!(
        arcade.play(&mut ledger, &"alice").unwrap_err(),
        Error::InsufficientFunds
    );
    assert_eq!(arcade.game_counter(), 0);
    assert_eq!(ledger.balance_of("alice"), PRICE - 1);
    assert_eq!(ledger.balance_of(ARCADE), RESERVE_FLOOR);
}

// Scenario A: three ascending scores rank in descending order.
#[test]
fn scores_rank_in_descending_order() {
    let mut arcade = new_arcade(3);
    let mut ledger = new_ledger();

    for score in [
        entry(1, "alice", "Alice"),
        entry(3, "bob", "Bob"),
        entry(10, "charlie", "Charlie"),
    ] {
        arcade.submit_score(&mut ledger, &ADMIN, score).unwrap();
    }

    let nicknames: Vec<_> = arcade
        .top_scores()
        .iter()
        .map(|entry| entry.nickname.as_str())
        .collect();
    assert_eq!(nicknames, ["Charlie", "Bob", "Alice"]);
}

// Scenario B: a new high score evicts the lowest entry and settles the pool.
#[test]
fn new_high_score_settles_the_prize_pool() {
    let mut arcade = new_arcade(3);
    let mut ledger = new_ledger();
    ledger.credit("player", PRICE * 5);
    for _ in 0..5 {
        arcade.play(&mut ledger, &"player").unwrap();
    }
    let pool = PRICE * 5;

    arcade
        .submit_score(&mut ledger, &ADMIN, entry(1, "alice", "Alice"))
        .unwrap();
    // Priming insertions each landed on top and drained the pool to Alice.
    assert_eq!(ledger.balance_of("alice"), pool);
    arcade
        .submit_score(&mut ledger, &ADMIN, entry(3, "bob", "Bob"))
        .unwrap();
    arcade
        .submit_score(&mut ledger, &ADMIN, entry(10, "charlie", "Charlie"))
        .unwrap();

    // Refill the pool, then let Dave take the top spot.
    ledger.credit("player", PRICE * 4);
    for _ in 0..4 {
        arcade.play(&mut ledger, &"player").unwrap();
    }
    let pool = PRICE * 4;
    let outcome = arcade
        .submit_score(&mut ledger, &ADMIN, entry(100, "dave", "Dave"))
        .unwrap();

    let InsertOutcome::Replaced { evicted, rank } = outcome else {
        panic!("expected eviction, got {outcome:?}");
    };
    assert_eq!(rank, 0);
    assert_eq!(evicted.nickname, "Alice");
    assert_eq!(arcade.top_scores().len(), 3);
    assert_eq!(arcade.top_scores()[0].nickname, "Dave");
    assert_eq!(ledger.balance_of("dave"), pool);
    assert_eq!(ledger.balance_of(ARCADE), RESERVE_FLOOR);
    assert!(arcade.total_distributed() >= pool);
}

// Scenario D: non-admins cannot submit scores.
#[test]
fn non_admin_submission_is_unauthorized() {
    let mut arcade = new_arcade(3);
    let mut ledger = new_ledger();

    assert_eq!(
        arcade
            .submit_score(&mut ledger, &"mallory", entry(10, "mallory", "Mallory"))
            .unwrap_err(),
        Error::Unauthorized
    );
    assert!(arcade.top_scores().is_empty());
}

#[test]
fn non_top_scores_never_touch_the_pool() {
    let mut arcade = new_arcade(3);
    let mut ledger = new_ledger();
    ledger.credit("player", PRICE * 2);
    arcade.play(&mut ledger, &"player").unwrap();
    arcade.play(&mut ledger, &"player").unwrap();

    arcade
        .submit_score(&mut ledger, &ADMIN, entry(50, "alice", "Alice"))
        .unwrap();
    let distributed = arcade.total_distributed();
    let arcade_balance = ledger.balance_of(ARCADE);

    // Second place: no settlement, no counter change.
    arcade
        .submit_score(&mut ledger, &ADMIN, entry(20, "bob", "Bob"))
        .unwrap();
    assert_eq!(arcade.total_distributed(), distributed);
    assert_eq!(ledger.balance_of(ARCADE), arcade_balance);
    assert_eq!(ledger.balance_of("bob"), 0);
}

#[test]
fn empty_pool_settlement_is_a_noop() {
    let mut arcade = new_arcade(3);
    let mut ledger = new_ledger();

    // Top score with nothing above the reserve floor.
    let outcome = arcade
        .submit_score(&mut ledger, &ADMIN, entry(10, "alice", "Alice"))
        .unwrap();
    assert!(outcome.is_new_top());
    assert_eq!(arcade.total_distributed(), 0);
    assert_eq!(ledger.balance_of(ARCADE), RESERVE_FLOOR);
    assert_eq!(ledger.balance_of("alice"), 0);
}

#[test]
fn failed_settlement_rolls_back_the_insertion() {
    let mut arcade = new_arcade(3);
    let mut ledger = new_ledger();
    ledger.credit("player", PRICE);
    arcade.play(&mut ledger, &"player").unwrap();
    arcade
        .submit_score(&mut ledger, &ADMIN, entry(5, "alice", "Alice"))
        .unwrap();
    let before = arcade.clone();

    let mut rejecting = RejectingLedger {
        inner: ledger.clone(),
    };
    rejecting.inner.credit(ARCADE, PRICE);
    let err = arcade
        .submit_score(&mut rejecting, &ADMIN, entry(10, "bob", "Bob"))
        .unwrap_err();

    assert_eq!(err, Error::InsufficientFunds);
    assert_eq!(arcade, before);
    assert_eq!(rejecting.balance(&"bob"), 0);
}

#[test]
fn broken_ordering_is_never_persisted_by_submit() {
    let mut arcade = new_arcade(3);
    let mut ledger = new_ledger();

    // An out-of-order board makes the post-insert invariant check fail.
    let corrupt = arcade_model::Leaderboard::from_parts(
        3,
        vec![entry(1, "alice", "Alice"), entry(9, "bob", "Bob")],
    );
    arcade.set_leaderboard(corrupt.clone());

    let err = arcade
        .submit_score(&mut ledger, &ADMIN, entry(5, "carol", "Carol"))
        .unwrap_err();
    assert_eq!(err, Error::CapacityInvariantViolation);
    // The failed insertion is rolled back, not half-applied.
    assert_eq!(arcade.leaderboard(), &corrupt);
}

#[test]
fn admin_management_round_trip() {
    let mut arcade = new_arcade(3);

    assert_eq!(
        arcade.add_admin(&"mallory", "mallory").unwrap_err(),
        Error::Unauthorized
    );

    arcade.add_admin(&ADMIN, "bob").unwrap();
    arcade.add_admin(&ADMIN, "bob").unwrap();
    assert_eq!(arcade.admins().admins(), [ADMIN, "bob"]);

    arcade.remove_admin(&ADMIN).unwrap();
    assert_eq!(arcade.admins().admins(), ["bob"]);
    assert_eq!(
        arcade.remove_admin(&"bob").unwrap_err(),
        Error::CannotRemoveLastAdmin
    );
}

#[test]
fn update_price_is_gated_and_validated() {
    let mut arcade = new_arcade(3);
    let mut ledger = new_ledger();

    assert_eq!(
        arcade.update_price(&"mallory", 500).unwrap_err(),
        Error::Unauthorized
    );
    assert_eq!(arcade.update_price(&ADMIN, 0).unwrap_err(), Error::InvalidPrice);

    arcade.update_price(&ADMIN, 500).unwrap();
    assert_eq!(arcade.price_per_game(), 500);

    // The new price is what the next play debits.
    ledger.credit("alice", 500);
    arcade.play(&mut ledger, &"alice").unwrap();
    assert_eq!(ledger.balance_of("alice"), 0);
}

#[test]
fn leaderboard_invariants_hold_under_churn() {
    let mut arcade = new_arcade(4);
    let mut ledger = new_ledger();

    for (round, score) in [3u64, 17, 9, 9, 42, 1, 42, 25, 8, 30, 2, 50].into_iter().enumerate() {
        ledger.credit("player", PRICE);
        arcade.play(&mut ledger, &"player").unwrap();
        let nickname = format!("p{round}");
        arcade
            .submit_score(
                &mut ledger,
                &ADMIN,
                ScoreEntry::new(score, "player", nickname).unwrap(),
            )
            .unwrap();

        let scores: Vec<_> = arcade.top_scores().iter().map(|e| e.score).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(scores.len() <= 4);
        // The vault never dips below its reserve floor.
        assert!(ledger.balance_of(ARCADE) >= RESERVE_FLOOR);
    }
}
