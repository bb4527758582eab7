use crate::helpers::cli_runner::CliRunner;
use serial_test::serial;

#[test]
#[serial]
fn quit_exits_with_interrupted_code() {
    let res = CliRunner::new()
        .with_stdin("q\n")
        .run(&["play", "--players", "3", "--seed", "10"]);
    assert_eq!(res.exit_code, 130);
    assert!(res.stdout.starts_with("play: players=3 seed=10 ai=BaselineAI"));
    assert!(res.stdout.contains("Game abandoned after 0 turns"));
}

#[test]
#[serial]
fn end_of_input_counts_as_quit() {
    let res = CliRunner::new()
        .with_stdin("")
        .run(&["play", "--players", "2", "--seed", "10"]);
    assert_eq!(res.exit_code, 130);
}

#[test]
#[serial]
fn drawing_every_turn_lets_a_bot_win() {
    let script = "d\n".repeat(2_000);
    let res = CliRunner::new()
        .with_stdin(&script)
        .run(&["play", "--players", "2", "--seed", "4"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("You drew"));
    assert!(res.stdout.contains("Winner: Bot 2 after "));
}

#[test]
#[serial]
fn out_of_range_index_is_reprompted() {
    let res = CliRunner::new()
        .with_stdin("99\nd\nq\n")
        .run(&["play", "--players", "2", "--seed", "1"]);
    assert_eq!(res.exit_code, 130);
    assert!(res.stderr.contains("No card at position 99"));
    assert!(res.stdout.contains("You drew 1"));
}
