use std::io::Write;
use std::process::{Command, Stdio};

fn run_with_input(args: &[&str], input: &str) -> std::process::Output {
    let exe = env!("CARGO_BIN_EXE_refactor");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn refactor");
    child
        .stdin
        .as_mut()
        .expect("piped stdin")
        .write_all(input.as_bytes())
        .expect("write script");
    child.wait_with_output().expect("collect output")
}

#[test]
fn cli_reaches_stats_and_exits_cleanly_on_eof() {
    let output = run_with_input(&["--seed", "1337", "--mute"], "1\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("R E F A C T O R"));
    assert!(stdout.contains("Share code: 1337"));
    assert!(stdout.contains("Where you stand"));
    assert!(stdout.contains("Money"));
}

#[test]
fn cli_stats_screen_recounts_the_history() {
    let output = run_with_input(&["--seed", "1337", "--mute"], "1\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("The month so far"));
    assert!(stdout.contains("Day 1: thirty days left on the badge"));
}

#[test]
fn cli_reprompts_on_noise_until_a_legal_pick() {
    let output = run_with_input(&["--seed", "1337", "--mute"], "9\nwake up\n1\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Pick a number from 1 to 4."));
    assert!(stdout.contains("Where you stand"));
}

#[test]
fn cli_ends_a_day_and_moves_the_calendar() {
    // Sleep through the first night; whatever day two brings, EOF leaves
    // the story cleanly.
    let output = run_with_input(&["--seed", "RF-STACK42", "--mute"], "4\n1\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Turn in without doing anything tonight?"));
    assert!(stdout.contains("Day 2"));
}

#[test]
fn cli_prints_a_fresh_share_code_without_a_seed() {
    let output = run_with_input(&["--mute"], "");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Share code: RF-"));
}

#[test]
fn cli_rejects_a_seed_it_cannot_parse() {
    let output = run_with_input(&["--seed", "RF-XYZZY99x"], "");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("share code"));
}
