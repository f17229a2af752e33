//! Word-by-word reveal timing and replay bookkeeping.

/// Gap between the start of consecutive words, in seconds.
pub const WORD_STAGGER_SECS: f64 = 0.1;
/// Quiet period after the last resize event before the new width is evaluated.
pub const RESIZE_SETTLE_MS: f64 = 800.0;
/// Width change required, on top of a breakpoint crossing, to replay.
pub const REPLAY_MIN_DELTA_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// below 640px
    Narrow,
    /// 640px to 767px
    Medium,
    /// 768px to 1023px
    Wide,
    /// 1024px to 1279px
    ExtraWide,
    /// 1280px and up
    UltraWide,
}

impl Breakpoint {
    pub const BOUNDARIES: [f64; 4] = [640.0, 768.0, 1024.0, 1280.0];

    pub fn from_width(width: f64) -> Self {
        if width < Self::BOUNDARIES[0] {
            Breakpoint::Narrow
        } else if width < Self::BOUNDARIES[1] {
            Breakpoint::Medium
        } else if width < Self::BOUNDARIES[2] {
            Breakpoint::Wide
        } else if width < Self::BOUNDARIES[3] {
            Breakpoint::ExtraWide
        } else {
            Breakpoint::UltraWide
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    /// Centered on narrow layouts, left-aligned from `lg` up.
    Responsive,
}

impl Alignment {
    pub fn class(&self) -> &'static str {
        match self {
            Alignment::Left => "justify-start",
            Alignment::Center => "justify-center",
            Alignment::Responsive => "justify-center lg:justify-start",
        }
    }
}

/// One animated unit of a phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub index: usize,
    /// `None` for the empty token between consecutive spaces.
    pub text: Option<String>,
}

impl Word {
    pub fn delay_secs(&self) -> f64 {
        self.index as f64 * WORD_STAGGER_SECS
    }

    /// Identity of the word for a given replay generation. A new generation
    /// yields new keys, so the renderer mounts the words from scratch.
    pub fn key(&self, generation: u64) -> String {
        format!("{generation}-{}", self.index)
    }
}

/// Splits on single spaces. Runs of spaces produce blank words rather than
/// collapsing, so the rendered spacing matches the source text.
pub fn split_words(text: &str) -> Vec<Word> {
    text.split(' ')
        .enumerate()
        .map(|(index, s)| Word {
            index,
            text: if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            },
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealController {
    revealed: bool,
    generation: u64,
    last_width: Option<f64>,
}

impl RevealController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_width(&self) -> Option<f64> {
        self.last_width
    }

    /// Latches the reveal the first time the container is seen. Scrolling it
    /// out of view again does not hide the words.
    ///
    /// Returns whether this call triggered the reveal.
    pub fn on_visibility(&mut self, visible: bool) -> bool {
        if visible && !self.revealed {
            self.revealed = true;
            return true;
        }
        false
    }

    /// Records the width seen at mount. Only the first call has any effect.
    pub fn record_width(&mut self, width: f64) {
        if self.last_width.is_none() {
            self.last_width = Some(width);
        }
    }

    /// Evaluates a width once resizing has settled. Replays only when the
    /// breakpoint changed and the width moved by more than
    /// [`REPLAY_MIN_DELTA_PX`]; the recorded width is only updated on replay.
    ///
    /// Returns whether the generation was bumped.
    pub fn on_settled_width(&mut self, width: f64) -> bool {
        let last = match self.last_width {
            Some(w) => w,
            None => {
                self.last_width = Some(width);
                return false;
            }
        };
        let crossed = Breakpoint::from_width(last) != Breakpoint::from_width(width);
        if crossed && (width - last).abs() > REPLAY_MIN_DELTA_PX {
            self.generation += 1;
            self.last_width = Some(width);
            true
        } else {
            false
        }
    }

    /// Forces a replay regardless of the viewport.
    pub fn replay(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn mounted_at(width: f64) -> RevealController {
        let mut c = RevealController::new();
        c.record_width(width);
        c.on_visibility(true);
        c
    }

    #[test]
    fn test_split_welcome() {
        let words = split_words("WELCOME TO THE");
        assert_eq!(words.len(), 3);
        let delays = words.iter().map(|w| w.delay_secs()).collect::<Vec<_>>();
        assert_eq!(delays[0], 0.0);
        assert!((delays[1] - 0.1).abs() < 1e-9);
        assert!((delays[2] - 0.2).abs() < 1e-9);
        assert_eq!(words[2].text.as_deref(), Some("THE"));
    }

    #[test]
    fn test_delay_is_unbounded() {
        let phrase = vec!["w"; 21].join(" ");
        let words = split_words(&phrase);
        assert_eq!(words.len(), 21);
        assert!((words[20].delay_secs() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_blank_words_keep_spacing() {
        let words = split_words("LET'S  PLAY");
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text.as_deref(), Some("LET'S"));
        assert_eq!(words[1].text, None);
        assert_eq!(words[2].text.as_deref(), Some("PLAY"));

        let empty = split_words("");
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].text, None);
    }

    #[test]
    fn test_alignment_classes() {
        assert_eq!(Alignment::Left.class(), "justify-start");
        assert_eq!(Alignment::Center.class(), "justify-center");
        let responsive = Alignment::Responsive.class();
        let rules = responsive.split_whitespace().collect::<Vec<_>>();
        assert!(rules.contains(&"justify-center"));
        assert!(rules.contains(&"lg:justify-start"));
        assert!(!rules.contains(&"justify-start"));
        assert_eq!(Alignment::default(), Alignment::Center);
    }

    #[test]
    fn test_breakpoint_edges() {
        assert_eq!(Breakpoint::from_width(0.0), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(639.0), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(640.0), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(767.9), Breakpoint::Medium);
        assert_eq!(Breakpoint::from_width(768.0), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(1023.0), Breakpoint::Wide);
        assert_eq!(Breakpoint::from_width(1024.0), Breakpoint::ExtraWide);
        assert_eq!(Breakpoint::from_width(1279.0), Breakpoint::ExtraWide);
        assert_eq!(Breakpoint::from_width(1280.0), Breakpoint::UltraWide);
        assert_eq!(Breakpoint::from_width(3840.0), Breakpoint::UltraWide);
        assert!(Breakpoint::Narrow < Breakpoint::UltraWide);
    }

    #[test]
    fn test_small_resize_does_not_replay() {
        let mut c = mounted_at(1000.0);
        assert!(!c.on_settled_width(1050.0));
        assert_eq!(c.generation(), 0);
        assert_eq!(c.last_width(), Some(1000.0));
    }

    #[test]
    fn test_breakpoint_crossing_replays_once() {
        let mut c = mounted_at(1000.0);
        // the debounced burst 1000 -> 1100 -> 1200 -> 1300 is evaluated once
        assert!(c.on_settled_width(1300.0));
        assert_eq!(c.generation(), 1);
        assert_eq!(c.last_width(), Some(1300.0));
        // settling again on the same width is a no-op
        assert!(!c.on_settled_width(1300.0));
        assert_eq!(c.generation(), 1);
    }

    #[test]
    fn test_crossing_needs_large_delta() {
        // 1010 -> 1030 crosses 1024 but only moves 20px
        let mut c = mounted_at(1010.0);
        assert!(!c.on_settled_width(1030.0));
        assert_eq!(c.generation(), 0);
        // exactly 100px is not enough either
        let mut c = mounted_at(1000.0);
        assert!(!c.on_settled_width(1100.0));
        assert_eq!(c.generation(), 0);
    }

    #[test]
    fn test_large_delta_needs_crossing() {
        // 1030 -> 1270 moves 240px inside the same bucket
        let mut c = mounted_at(1030.0);
        assert!(!c.on_settled_width(1270.0));
        assert_eq!(c.generation(), 0);
    }

    #[test]
    fn test_last_width_only_moves_on_replay() {
        let mut c = mounted_at(1000.0);
        // small drifts accumulate against the recorded width
        assert!(!c.on_settled_width(1050.0));
        assert!(!c.on_settled_width(1090.0));
        assert!(c.on_settled_width(1290.0));
        assert_eq!(c.generation(), 1);
        // shrinking back to a phone layout replays again
        assert!(c.on_settled_width(390.0));
        assert_eq!(c.generation(), 2);
    }

    #[test]
    fn test_first_settle_without_mount_width_records_only() {
        let mut c = RevealController::new();
        assert!(!c.on_settled_width(1300.0));
        assert_eq!(c.last_width(), Some(1300.0));
        assert_eq!(c.generation(), 0);
    }

    #[test]
    fn test_theme_toggle_does_not_replay() {
        let mut c = mounted_at(1000.0);
        let mut theme = Theme::Dark;
        // a theme switch reflows the page without resizing the window
        for _ in 0..4 {
            theme = theme.toggled();
            assert!(!c.on_settled_width(1000.0));
        }
        assert_eq!(theme, Theme::Dark);
        assert_eq!(c.generation(), 0);
    }

    #[test]
    fn test_reveal_latches() {
        let mut c = RevealController::new();
        assert!(!c.on_visibility(false));
        assert!(!c.is_revealed());
        assert!(c.on_visibility(true));
        assert!(!c.on_visibility(false));
        assert!(c.is_revealed());
        assert!(!c.on_visibility(true));
        assert_eq!(c.generation(), 0);
    }

    #[test]
    fn test_generation_is_folded_into_keys() {
        let words = split_words("MY WORK");
        let mut c = mounted_at(800.0);
        let before = words
            .iter()
            .map(|w| w.key(c.generation()))
            .collect::<Vec<_>>();
        assert_eq!(before, vec!["0-0", "0-1"]);
        c.replay();
        let after = words
            .iter()
            .map(|w| w.key(c.generation()))
            .collect::<Vec<_>>();
        assert_eq!(after, vec!["1-0", "1-1"]);
        assert!(before.iter().all(|k| !after.contains(k)));
    }
}
