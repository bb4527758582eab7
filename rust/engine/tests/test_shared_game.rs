use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use wildcard_engine::errors::GameError;
use wildcard_engine::game::Game;
use wildcard_engine::player::{Player, PlayerId};

/// Several tasks race to draw through one lock; only the seat to move succeeds
/// and the turn log stays consistent.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn one_lock_per_game_serializes_turns() {
    let mut game = Game::with_seed(Player::new("a", "A"), 77);
    for p in ["b", "c"] {
        game.add_player(Player::new(p, p.to_uppercase())).await.unwrap();
    }
    game.start_game().await.unwrap();
    // a slow handler widens the window a racing task would need
    game.events().on_turn_completed(|| async {
        tokio::time::sleep(Duration::from_millis(1)).await;
    });
    let game = Arc::new(Mutex::new(game));

    let mut tasks = Vec::new();
    for p in ["a", "b", "c"] {
        let game = game.clone();
        tasks.push(tokio::spawn(async move {
            let me = PlayerId::from(p);
            let mut done = 0;
            while done < 5 {
                let mut g = game.lock().await;
                match g.process_turn(&me, None, None).await {
                    Ok(_) => done += 1,
                    Err(GameError::OutOfTurn { .. }) => {}
                    Err(e) => panic!("unexpected error: {e}"),
                }
                drop(g);
                tokio::task::yield_now().await;
            }
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }

    let g = game.lock().await;
    assert_eq!(g.history().len(), 15);
    for (i, record) in g.history().iter().enumerate() {
        assert_eq!(record.turn as usize, i + 1);
        assert_eq!(record.player, g.players()[i % 3].id);
    }
}
