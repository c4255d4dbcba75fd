//! Search with interactive result selection
//!
//! Title search is a case-insensitive substring match; tag search is an
//! exact case-insensitive match against any tag. Both exclude flagged
//! videos and share the same presentation and selection flow.

use super::Player;
use crate::console::{Console, IndexPicker};
use crate::model::Video;

impl<'l, C: Console, P: IndexPicker> Player<'l, C, P> {
    /// Search titles for a case-insensitive substring
    pub fn search_videos(&mut self, term: &str) {
        let needle = term.to_lowercase();
        let matches: Vec<&'l Video> = self
            .visible_videos()
            .into_iter()
            .filter(|video| video.title.to_lowercase().contains(&needle))
            .collect();

        self.present_results(term, matches);
    }

    /// Search for an exact tag, case-insensitively
    pub fn search_videos_with_tag(&mut self, tag: &str) {
        let needle = tag.to_lowercase();
        let matches: Vec<&'l Video> = self
            .visible_videos()
            .into_iter()
            .filter(|video| video.tags.iter().any(|t| t.to_lowercase() == needle))
            .collect();

        self.present_results(tag, matches);
    }

    /// Show results 1-indexed and offer to play one of them
    ///
    /// Any answer that is not a number within range counts as "no"; no
    /// prompt is issued at all when there are no results.
    fn present_results(&mut self, term: &str, mut matches: Vec<&'l Video>) {
        if matches.is_empty() {
            self.console
                .line(&format!("No search results for {}", term));
            return;
        }

        matches.sort_by(|a, b| (&a.title, &a.id, &a.tags).cmp(&(&b.title, &b.id, &b.tags)));

        self.console
            .line(&format!("Here are the results for {}:", term));
        for (i, video) in matches.iter().enumerate() {
            self.console.line(&format!("{}) {}", i + 1, video.describe()));
        }
        self.console.line(
            "Would you like to play any of the above? If yes, specify the number of the video.",
        );
        self.console
            .line("If your answer is not a valid number, we will assume it's a no.");

        let answer = self.console.read_line().unwrap_or_default();
        if let Ok(choice) = answer.trim().parse::<usize>() {
            if (1..=matches.len()).contains(&choice) {
                let video_id = matches[choice - 1].id.clone();
                self.play(&video_id);
            }
        }
    }
}
