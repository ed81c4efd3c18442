pub mod hover;
pub mod reveal;

pub use hover::{use_hover, HoverLift};
pub use reveal::{
    use_mount_reveal, use_scroll_reveal, Ease, Pose, RevealPhase, RevealTimeline, RevealTrack,
};
