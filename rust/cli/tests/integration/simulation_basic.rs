use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;

use serial_test::serial;
use std::collections::BTreeMap;
use wildcard_engine::logger::LogLine;

#[test]
#[serial]
fn sim_writes_one_line_per_turn() {
    let tfm = TempFileManager::new().expect("temp dir");
    let out_path = tfm.path().join("logs").join("sim.jsonl");
    let out_str = out_path.to_string_lossy().into_owned();

    let res = CliRunner::new().run(&[
        "sim", "--games", "3", "--players", "4", "--seed", "42", "--output",
        out_str.as_str(),
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let contents = std::fs::read_to_string(&out_path).expect("sim output");
    let lines: Vec<LogLine> = contents
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid log line"))
        .collect();

    let mut per_game: BTreeMap<String, Vec<&LogLine>> = BTreeMap::new();
    for line in &lines {
        assert!(line.ts.is_some());
        per_game.entry(line.game_id.clone()).or_default().push(line);
    }
    assert_eq!(per_game.len(), 3);

    for (game_id, turns) in &per_game {
        for (i, t) in turns.iter().enumerate() {
            assert_eq!(t.record.turn as usize, i + 1, "{}", game_id);
        }
        let last = turns.last().expect("at least one turn");
        assert!(last.record.winning);
        assert!(turns[..turns.len() - 1].iter().all(|t| !t.record.winning));

        let summary = format!("{}: ", game_id);
        let reported = res
            .stdout
            .lines()
            .find(|l| l.starts_with(&summary))
            .expect("game summary line");
        assert!(reported.ends_with(&format!("after {} turns", turns.len())));
    }
}

#[test]
#[serial]
fn sim_is_reproducible_from_seed() {
    let cli = CliRunner::new();
    let a = cli.run(&["sim", "--games", "2", "--players", "3", "--seed", "7"]);
    let b = cli.run(&["sim", "--games", "2", "--players", "3", "--seed", "7"]);
    assert_eq!(a.exit_code, 0);
    assert_eq!(a.stdout, b.stdout);
}

#[test]
#[serial]
fn sim_with_random_bots_finishes() {
    let res = CliRunner::new().run_with_env(
        &["sim", "--games", "2", "--players", "2", "--seed", "3"],
        &[("WILDCARD_AI", "random")],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("ai=random"));
    assert_eq!(res.stdout.matches(" wins after ").count(), 2);
}
