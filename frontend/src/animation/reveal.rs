//! Scroll-gated entrance animations.
//!
//! Each section owns a [`RevealTimeline`] and a [`RevealPhase`] machine. The
//! phase only ever moves on two inputs: whether the section crossed its
//! trigger line, and a "settled" tick once the timeline has had time to
//! finish. Element styles are derived from the phase alone, so scrolling back
//! and forth any number of times always lands on the declared poses.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Default trigger line: the section top reaching 70% of the viewport height.
pub const DEFAULT_TRIGGER: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub blur: f64,
}

impl Pose {
    pub const REST: Pose = Pose { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0, blur: 0.0 };

    /// Fully transparent, otherwise at rest.
    pub const fn hidden() -> Self {
        Pose { opacity: 0.0, ..Pose::REST }
    }

    pub const fn x(self, x: f64) -> Self {
        Pose { x, ..self }
    }

    pub const fn y(self, y: f64) -> Self {
        Pose { y, ..self }
    }

    pub const fn scale(self, scale: f64) -> Self {
        Pose { scale, ..self }
    }

    pub const fn blur(self, blur: f64) -> Self {
        Pose { blur, ..self }
    }

    pub fn css(&self) -> String {
        format!(
            "opacity: {}; visibility: {}; transform: translate3d({}px, {}px, 0) scale({}); filter: blur({}px);",
            self.opacity,
            if self.opacity == 0.0 { "hidden" } else { "inherit" },
            self.x,
            self.y,
            self.scale,
            self.blur,
        )
    }
}

/// Cubic bezier easing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ease(pub f64, pub f64, pub f64, pub f64);

impl Ease {
    pub const POWER2_OUT: Ease = Ease(0.25, 0.46, 0.45, 0.94);
    pub const POWER3_OUT: Ease = Ease(0.215, 0.61, 0.355, 1.0);
    pub const BACK_OUT: Ease = Ease(0.175, 0.885, 0.32, 1.275);

    /// The same curve played backwards in time.
    pub fn reversed(self) -> Ease {
        Ease(1.0 - self.2, 1.0 - self.3, 1.0 - self.0, 1.0 - self.1)
    }

    pub fn css(&self) -> String {
        format!("cubic-bezier({}, {}, {}, {})", self.0, self.1, self.2, self.3)
    }
}

/// Rounds to whole milliseconds so schedules compare and print cleanly.
fn secs(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// A group of elements sharing one hidden pose, entering one after another.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTrack {
    pub from: Pose,
    /// Seconds each element takes.
    pub duration: f64,
    /// Seconds into the timeline at which the first element starts.
    pub at: f64,
    /// Seconds between consecutive elements.
    pub stagger: f64,
    pub count: usize,
}

impl RevealTrack {
    pub fn new(from: Pose, duration: f64) -> Self {
        Self { from, duration, at: 0.0, stagger: 0.0, count: 1 }
    }

    pub fn at(mut self, at: f64) -> Self {
        self.at = at;
        self
    }

    pub fn stagger(mut self, stagger: f64, count: usize) -> Self {
        self.stagger = stagger;
        self.count = count;
        self
    }

    fn start_of(&self, index: usize) -> f64 {
        secs(self.at + self.stagger * index as f64)
    }

    fn end(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        secs(self.start_of(self.count - 1) + self.duration)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTimeline {
    /// Fraction of the viewport height the section top must reach.
    pub trigger: f64,
    pub ease: Ease,
    pub tracks: Vec<RevealTrack>,
}

impl RevealTimeline {
    pub fn new() -> Self {
        Self { trigger: DEFAULT_TRIGGER, ease: Ease::POWER3_OUT, tracks: Vec::new() }
    }

    pub fn trigger(mut self, trigger: f64) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn track(mut self, track: RevealTrack) -> Self {
        self.tracks.push(track);
        self
    }

    /// Seconds from the first element starting to the last one finishing.
    pub fn total_duration(&self) -> f64 {
        self.tracks.iter().map(RevealTrack::end).fold(0.0, f64::max)
    }

    pub fn total_millis(&self) -> u32 {
        (self.total_duration() * 1000.0).round() as u32
    }

    /// Inline style for element `index` of track `track` while in `phase`.
    /// Reversal mirrors the forward schedule, so the last element to enter is
    /// the first to leave.
    pub fn style(&self, phase: RevealPhase, track: usize, index: usize) -> String {
        let Some(group) = self.tracks.get(track) else {
            return String::new();
        };
        let forward_delay = group.start_of(index);
        match phase {
            RevealPhase::Hidden => group.from.css(),
            RevealPhase::Visible => Pose::REST.css(),
            RevealPhase::Revealing => format!(
                "{} transition: all {}s {} {}s;",
                Pose::REST.css(),
                group.duration,
                self.ease.css(),
                forward_delay,
            ),
            RevealPhase::Reversing => {
                let reverse_delay = secs(self.total_duration() - (forward_delay + group.duration)).max(0.0);
                format!(
                    "{} transition: all {}s {} {}s;",
                    group.from.css(),
                    group.duration,
                    self.ease.reversed().css(),
                    reverse_delay,
                )
            }
        }
    }
}

impl Default for RevealTimeline {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    #[default]
    Hidden,
    Revealing,
    Visible,
    Reversing,
}

impl RevealPhase {
    /// Play forward when the trigger is crossed going down, reverse when
    /// scrolling back above it.
    pub fn on_scroll(self, past_trigger: bool) -> Self {
        match (self, past_trigger) {
            (RevealPhase::Hidden, true) | (RevealPhase::Reversing, true) => RevealPhase::Revealing,
            (RevealPhase::Revealing, false) | (RevealPhase::Visible, false) => RevealPhase::Reversing,
            (phase, _) => phase,
        }
    }

    pub fn on_settled(self) -> Self {
        match self {
            RevealPhase::Revealing => RevealPhase::Visible,
            RevealPhase::Reversing => RevealPhase::Hidden,
            phase => phase,
        }
    }

    pub fn is_moving(self) -> bool {
        matches!(self, RevealPhase::Revealing | RevealPhase::Reversing)
    }
}

pub fn crossed_trigger(section_top: f64, viewport_height: f64, trigger: f64) -> bool {
    section_top <= viewport_height * trigger
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    pub phase: RevealPhase,
    /// Bumped on every phase change so a stale settle tick is ignored.
    pub generation: u32,
}

pub enum RevealAction {
    Scroll { past_trigger: bool },
    Settled { generation: u32 },
}

impl RevealState {
    pub fn apply(self, action: RevealAction) -> Self {
        match action {
            RevealAction::Scroll { past_trigger } => {
                let phase = self.phase.on_scroll(past_trigger);
                if phase == self.phase {
                    self
                } else {
                    RevealState { phase, generation: self.generation.wrapping_add(1) }
                }
            }
            RevealAction::Settled { generation } if generation == self.generation => {
                RevealState { phase: self.phase.on_settled(), ..self }
            }
            RevealAction::Settled { .. } => self,
        }
    }
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[hook]
fn use_settle_timer(state: UseReducerHandle<RevealState>, total_millis: u32) {
    let phase = state.phase;
    let generation = state.generation;
    let dispatcher = state.dispatcher();
    use_effect_with_deps(
        move |&(phase, generation)| {
            let timer = phase.is_moving().then(|| {
                Timeout::new(total_millis, move || {
                    dispatcher.dispatch(RevealAction::Settled { generation });
                })
            });
            // dropping the timeout cancels it
            move || drop(timer)
        },
        (phase, generation),
    );
}

/// Phase of the section behind `node`, following window scroll.
#[hook]
pub fn use_scroll_reveal(node: NodeRef, trigger: f64, total_millis: u32) -> RevealPhase {
    let state = use_reducer(RevealState::default);
    let (_, scroll_y) = use_window_scroll();

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                if let (Some(element), Some(window)) = (node.cast::<Element>(), web_sys::window()) {
                    let top = element.get_bounding_client_rect().top();
                    let viewport = window
                        .inner_height()
                        .ok()
                        .and_then(|h| h.as_f64())
                        .unwrap_or(0.0);
                    dispatcher.dispatch(RevealAction::Scroll {
                        past_trigger: crossed_trigger(top, viewport, trigger),
                    });
                }
                || ()
            },
            scroll_y,
        );
    }

    use_settle_timer(state.clone(), total_millis);
    state.phase
}

/// Phase for an entrance that plays once on mount after `delay_ms`.
#[hook]
pub fn use_mount_reveal(delay_ms: u32, total_millis: u32) -> RevealPhase {
    let state = use_reducer(RevealState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(delay_ms, move || {
                    dispatcher.dispatch(RevealAction::Scroll { past_trigger: true });
                });
                move || drop(timer)
            },
            (),
        );
    }

    use_settle_timer(state.clone(), total_millis);
    state.phase
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> RevealTimeline {
        RevealTimeline::new()
            .track(RevealTrack::new(Pose::hidden().y(30.0).blur(8.0), 0.8))
            .track(RevealTrack::new(Pose::hidden().y(20.0), 0.6).at(0.2))
            .track(RevealTrack::new(Pose::hidden().y(40.0).scale(0.95), 0.7).at(0.4).stagger(0.1, 6))
    }

    #[test]
    fn total_duration_covers_the_last_staggered_element() {
        let timeline = section();
        // 0.4 + 5 * 0.1 + 0.7
        assert!((timeline.total_duration() - 1.6).abs() < 1e-9);
        assert_eq!(timeline.total_millis(), 1600);
    }

    #[test]
    fn phases_follow_the_trigger() {
        use RevealPhase::*;
        assert_eq!(Hidden.on_scroll(false), Hidden);
        assert_eq!(Hidden.on_scroll(true), Revealing);
        assert_eq!(Revealing.on_scroll(true), Revealing);
        assert_eq!(Revealing.on_settled(), Visible);
        assert_eq!(Visible.on_scroll(true), Visible);
        assert_eq!(Visible.on_scroll(false), Reversing);
        assert_eq!(Reversing.on_scroll(true), Revealing);
        assert_eq!(Reversing.on_settled(), Hidden);
        assert_eq!(Revealing.on_scroll(false), Reversing);
    }

    #[test]
    fn repeated_reversals_return_to_the_initial_pose() {
        let timeline = section();
        let initial: Vec<String> = (0..6).map(|i| timeline.style(RevealPhase::Hidden, 2, i)).collect();

        let mut state = RevealState::default();
        for _ in 0..5 {
            state = state.apply(RevealAction::Scroll { past_trigger: true });
            state = state.apply(RevealAction::Settled { generation: state.generation });
            assert_eq!(state.phase, RevealPhase::Visible);
            state = state.apply(RevealAction::Scroll { past_trigger: false });
            state = state.apply(RevealAction::Settled { generation: state.generation });
            assert_eq!(state.phase, RevealPhase::Hidden);
        }

        let after: Vec<String> = (0..6).map(|i| timeline.style(state.phase, 2, i)).collect();
        assert_eq!(initial, after);
    }

    #[test]
    fn stale_settle_is_ignored() {
        let mut state = RevealState::default();
        state = state.apply(RevealAction::Scroll { past_trigger: true });
        let stale = state.generation;
        state = state.apply(RevealAction::Scroll { past_trigger: false });
        state = state.apply(RevealAction::Settled { generation: stale });
        assert_eq!(state.phase, RevealPhase::Reversing);
        state = state.apply(RevealAction::Settled { generation: state.generation });
        assert_eq!(state.phase, RevealPhase::Hidden);
    }

    #[test]
    fn scroll_without_phase_change_keeps_generation() {
        let state = RevealState::default().apply(RevealAction::Scroll { past_trigger: false });
        assert_eq!(state, RevealState::default());
    }

    #[test]
    fn stagger_delays_mirror_on_reverse() {
        let timeline = section();
        let forward = timeline.style(RevealPhase::Revealing, 2, 0);
        assert!(forward.ends_with(" 0.4s;"), "{forward}");
        // last card enters last and leaves first
        let reverse_last = timeline.style(RevealPhase::Reversing, 2, 5);
        assert!(reverse_last.ends_with(" 0s;"), "{reverse_last}");
        let reverse_first = timeline.style(RevealPhase::Reversing, 2, 0);
        assert!(reverse_first.ends_with(" 0.5s;"), "{reverse_first}");
    }

    #[test]
    fn reversed_ease_is_its_own_inverse() {
        for ease in [Ease::POWER2_OUT, Ease::POWER3_OUT, Ease::BACK_OUT] {
            let Ease(a, b, c, d) = ease.reversed().reversed();
            for (got, want) in [(a, ease.0), (b, ease.1), (c, ease.2), (d, ease.3)] {
                assert!((got - want).abs() < 1e-9, "{:?} vs {:?}", ease.reversed().reversed(), ease);
            }
        }
    }

    #[test]
    fn trigger_line() {
        assert!(crossed_trigger(500.0, 1000.0, 0.5));
        assert!(!crossed_trigger(500.5, 1000.0, 0.5));
        assert!(crossed_trigger(-200.0, 1000.0, DEFAULT_TRIGGER));
    }
}
