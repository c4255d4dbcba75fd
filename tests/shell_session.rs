use vidshell::catalogue;
use vidshell::console::{FixedPicker, ScriptedConsole};
use vidshell::player::Player;
use vidshell::shell;

/// Run a full scripted shell session over the sample catalogue and
/// return everything it printed.
fn run_session(input: &[&str]) -> Vec<String> {
    let library = catalogue::load_sample().expect("Sample catalogue must parse");
    let mut player = Player::new(
        &library,
        ScriptedConsole::with_input(input),
        FixedPicker(0),
    );
    shell::run(&mut player);
    player.console_mut().take_output()
}

#[test]
fn test_session_play_and_stop() {
    let output = run_session(&["PLAY amazing_cats_video_id", "STOP", "EXIT"]);

    assert_eq!(output[1], "Playing video: Amazing Cats");
    assert_eq!(output[2], "Stopping video: Amazing Cats");
}

#[test]
fn test_session_command_words_are_case_insensitive() {
    let output = run_session(&["play amazing_cats_video_id", "exit"]);

    assert_eq!(output[1], "Playing video: Amazing Cats");
}

#[test]
fn test_session_unknown_command_is_not_fatal() {
    let output = run_session(&["DANCE", "NUMBER_OF_VIDEOS", "EXIT"]);

    assert!(output[1].contains("DANCE is not recognized"));
    assert_eq!(output[2], "5 videos in the library");
}

#[test]
fn test_session_missing_argument_reports_usage() {
    let output = run_session(&["PLAY", "EXIT"]);

    assert_eq!(output[1], "Incomplete command, usage: PLAY <video_id>");
}

#[test]
fn test_session_blank_lines_are_ignored() {
    let output = run_session(&["", "   ", "NUMBER_OF_VIDEOS", "EXIT"]);

    assert_eq!(output.len(), 2);
    assert_eq!(output[1], "5 videos in the library");
}

#[test]
fn test_session_search_selection_consumes_next_line() {
    let output = run_session(&["SEARCH_VIDEOS cat", "1", "EXIT"]);

    assert_eq!(output[output.len() - 1], "Playing video: Amazing Cats");
}

#[test]
fn test_session_ends_at_end_of_input() {
    // No EXIT: the loop must stop when input runs out
    let output = run_session(&["NUMBER_OF_VIDEOS"]);

    assert_eq!(output[1], "5 videos in the library");
}

#[test]
fn test_session_flag_reason_spans_tokens() {
    let output = run_session(&["FLAG_VIDEO funny_dogs_video_id not about dogs", "EXIT"]);

    assert_eq!(
        output[1],
        "Successfully flagged video: Funny Dogs (reason: not about dogs)"
    );
}

#[test]
fn test_session_help_lists_commands() {
    let output = run_session(&["HELP", "EXIT"]);

    assert_eq!(output[1], "Available commands:");
    assert!(output.iter().any(|line| line.contains("PLAY_RANDOM")));
    assert!(output.iter().any(|line| line.contains("SEARCH_VIDEOS_WITH_TAG")));
}
