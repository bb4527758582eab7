use crate::helpers::cli_runner::CliRunner;
use serial_test::serial;

#[test]
#[serial]
fn help_lists_every_command() {
    let res = CliRunner::new().run(&["--help"]);
    assert_eq!(res.exit_code, 0);
    for cmd in ["deal", "play", "sim", "cfg"] {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
#[serial]
fn unknown_command_prints_usage_and_fails() {
    let res = CliRunner::new().run(&["shuffle"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Usage: wildcard <command> [options]"));
    assert!(res.stdout.is_empty());
}

#[test]
#[serial]
fn deal_is_reproducible_from_seed() {
    let cli = CliRunner::new();
    let a = cli.run(&["deal", "--players", "5", "--seed", "2024"]);
    let b = cli.run(&["deal", "--players", "5", "--seed", "2024"]);
    assert_eq!(a.exit_code, 0, "stderr={}", a.stderr);
    assert_eq!(a.stdout, b.stdout);

    let c = cli.run(&["deal", "--players", "5", "--seed", "2025"]);
    assert_ne!(a.stdout, c.stdout);
}

#[test]
#[serial]
fn deal_shows_seven_cards_per_seat() {
    let res = CliRunner::new().run(&["deal", "--players", "3", "--seed", "8"]);
    assert_eq!(res.exit_code, 0);
    let hands: Vec<&str> = res
        .stdout
        .lines()
        .filter(|l| l.starts_with("Player "))
        .collect();
    assert_eq!(hands.len(), 3);
    for line in hands {
        assert_eq!(line.matches('[').count(), 7, "{}", line);
    }
}

#[test]
#[serial]
fn players_out_of_range_is_an_argument_error() {
    let res = CliRunner::new().run(&["deal", "--players", "12"]);
    assert_eq!(res.exit_code, 2);
    assert!(!res.stderr.is_empty());
}
