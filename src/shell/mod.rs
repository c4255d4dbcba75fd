//! Interactive command shell
//!
//! Reads whitespace-separated commands from the console and dispatches
//! them to the player. Bad input is reported, never fatal.

use crate::console::{Console, IndexPicker};
use crate::player::Player;

/// One parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

/// Why a line failed to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Blank line, nothing to do
    Empty,
    /// First word is not a known command
    Unknown(String),
    /// Known command, missing arguments; carries the usage string
    MissingArgument(&'static str),
}

/// Parse one input line into a command
///
/// Command words are case-insensitive; arguments keep their casing.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(word) = tokens.next() else {
        return Err(ParseError::Empty);
    };

    fn arg(
        tokens: &mut std::str::SplitWhitespace<'_>,
        usage: &'static str,
    ) -> Result<String, ParseError> {
        tokens
            .next()
            .map(|t| t.to_string())
            .ok_or(ParseError::MissingArgument(usage))
    }

    let command = match word.to_uppercase().as_str() {
        "NUMBER_OF_VIDEOS" => Command::NumberOfVideos,
        "SHOW_ALL_VIDEOS" => Command::ShowAllVideos,
        "PLAY" => Command::Play(arg(&mut tokens, "PLAY <video_id>")?),
        "PLAY_RANDOM" => Command::PlayRandom,
        "STOP" => Command::Stop,
        "PAUSE" => Command::Pause,
        "CONTINUE" => Command::Continue,
        "SHOW_PLAYING" => Command::ShowPlaying,
        "CREATE_PLAYLIST" => Command::CreatePlaylist(arg(&mut tokens, "CREATE_PLAYLIST <playlist_name>")?),
        "ADD_TO_PLAYLIST" => Command::AddToPlaylist {
            playlist: arg(&mut tokens, "ADD_TO_PLAYLIST <playlist_name> <video_id>")?,
            video_id: arg(&mut tokens, "ADD_TO_PLAYLIST <playlist_name> <video_id>")?,
        },
        "REMOVE_FROM_PLAYLIST" => Command::RemoveFromPlaylist {
            playlist: arg(&mut tokens, "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>")?,
            video_id: arg(&mut tokens, "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>")?,
        },
        "CLEAR_PLAYLIST" => Command::ClearPlaylist(arg(&mut tokens, "CLEAR_PLAYLIST <playlist_name>")?),
        "DELETE_PLAYLIST" => Command::DeletePlaylist(arg(&mut tokens, "DELETE_PLAYLIST <playlist_name>")?),
        "SHOW_PLAYLIST" => Command::ShowPlaylist(arg(&mut tokens, "SHOW_PLAYLIST <playlist_name>")?),
        "SHOW_ALL_PLAYLISTS" => Command::ShowAllPlaylists,
        "SEARCH_VIDEOS" => Command::SearchVideos(arg(&mut tokens, "SEARCH_VIDEOS <search_term>")?),
        "SEARCH_VIDEOS_WITH_TAG" => {
            Command::SearchVideosWithTag(arg(&mut tokens, "SEARCH_VIDEOS_WITH_TAG <tag>")?)
        }
        "FLAG_VIDEO" => {
            let video_id = arg(&mut tokens, "FLAG_VIDEO <video_id> [reason]")?;
            let rest: Vec<&str> = tokens.collect();
            let reason = if rest.is_empty() {
                None
            } else {
                Some(rest.join(" "))
            };
            Command::FlagVideo { video_id, reason }
        }
        "ALLOW_VIDEO" => Command::AllowVideo(arg(&mut tokens, "ALLOW_VIDEO <video_id>")?),
        "HELP" => Command::Help,
        "EXIT" => Command::Exit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };

    Ok(command)
}

/// Run the interactive loop until EXIT or end of input
pub fn run<C: Console, P: IndexPicker>(player: &mut Player<'_, C, P>) {
    player
        .console_mut()
        .line("Hello! What would you like to do? Type HELP for a list of commands.");

    loop {
        let Some(line) = player.console_mut().read_line() else {
            log::debug!("End of input, leaving shell");
            break;
        };

        match parse_command(&line) {
            Ok(Command::Exit) => break,
            Ok(command) => dispatch(player, command),
            Err(ParseError::Empty) => {}
            Err(ParseError::Unknown(word)) => {
                player.console_mut().line(&format!(
                    "Please enter a valid command: {} is not recognized. Type HELP for a list of available commands.",
                    word
                ));
            }
            Err(ParseError::MissingArgument(usage)) => {
                player
                    .console_mut()
                    .line(&format!("Incomplete command, usage: {}", usage));
            }
        }
    }
}

fn dispatch<C: Console, P: IndexPicker>(player: &mut Player<'_, C, P>, command: Command) {
    match command {
        Command::NumberOfVideos => player.number_of_videos(),
        Command::ShowAllVideos => player.show_all_videos(),
        Command::Play(video_id) => player.play(&video_id),
        Command::PlayRandom => player.play_random(),
        Command::Stop => player.stop(),
        Command::Pause => player.pause(),
        Command::Continue => player.continue_video(),
        Command::ShowPlaying => player.show_playing(),
        Command::CreatePlaylist(name) => player.create_playlist(&name),
        Command::AddToPlaylist { playlist, video_id } => {
            player.add_to_playlist(&playlist, &video_id)
        }
        Command::RemoveFromPlaylist { playlist, video_id } => {
            player.remove_from_playlist(&playlist, &video_id)
        }
        Command::ClearPlaylist(name) => player.clear_playlist(&name),
        Command::DeletePlaylist(name) => player.delete_playlist(&name),
        Command::ShowPlaylist(name) => player.show_playlist(&name),
        Command::ShowAllPlaylists => player.show_all_playlists(),
        Command::SearchVideos(term) => player.search_videos(&term),
        Command::SearchVideosWithTag(tag) => player.search_videos_with_tag(&tag),
        Command::FlagVideo { video_id, reason } => {
            player.flag_video(&video_id, reason.as_deref())
        }
        Command::AllowVideo(video_id) => player.allow_video(&video_id),
        Command::Help => show_help(player),
        // Exit is handled by the loop
        Command::Exit => {}
    }
}

fn show_help<C: Console, P: IndexPicker>(player: &mut Player<'_, C, P>) {
    const HELP: &[&str] = &[
        "Available commands:",
        "  NUMBER_OF_VIDEOS                          - Show how many videos are in the library",
        "  SHOW_ALL_VIDEOS                           - List all videos",
        "  PLAY <video_id>                           - Play the specified video",
        "  PLAY_RANDOM                               - Play a random video",
        "  STOP                                      - Stop the current video",
        "  PAUSE                                     - Pause the current video",
        "  CONTINUE                                  - Resume the paused video",
        "  SHOW_PLAYING                              - Show the video that is playing",
        "  CREATE_PLAYLIST <playlist_name>           - Create a new empty playlist",
        "  ADD_TO_PLAYLIST <playlist_name> <video_id> - Add a video to a playlist",
        "  REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Remove a video from a playlist",
        "  CLEAR_PLAYLIST <playlist_name>            - Remove all videos from a playlist",
        "  DELETE_PLAYLIST <playlist_name>           - Delete a playlist",
        "  SHOW_PLAYLIST <playlist_name>             - Show the videos in a playlist",
        "  SHOW_ALL_PLAYLISTS                        - List all playlists",
        "  SEARCH_VIDEOS <search_term>               - Search video titles",
        "  SEARCH_VIDEOS_WITH_TAG <tag>              - Search videos by tag",
        "  FLAG_VIDEO <video_id> [reason]            - Flag a video",
        "  ALLOW_VIDEO <video_id>                    - Remove the flag from a video",
        "  HELP                                      - Show this help",
        "  EXIT                                      - Leave the shell",
    ];
    for line in HELP {
        player.console_mut().line(line);
    }
}
