use yew::prelude::*;

use super::reveal::{Ease, Pose};

/// Transient lift played while the pointer is over a card. Enter and leave
/// use the same curve and duration, so the card always returns to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverLift {
    pub y: f64,
    pub scale: f64,
    pub duration: f64,
}

impl HoverLift {
    pub const SERVICE_CARD: HoverLift = HoverLift { y: -8.0, scale: 1.02, duration: 0.3 };
    pub const SHOWCASE_CARD: HoverLift = HoverLift { y: -12.0, scale: 1.0, duration: 0.4 };
    pub const COUNTRY_CARD: HoverLift = HoverLift { y: -8.0, scale: 1.05, duration: 0.3 };

    pub fn pose(&self, hovered: bool) -> Pose {
        if hovered {
            Pose::REST.y(self.y).scale(self.scale)
        } else {
            Pose::REST
        }
    }

    pub fn style(&self, hovered: bool) -> String {
        let pose = self.pose(hovered);
        format!(
            "transform: translate3d(0px, {}px, 0) scale({}); transition: transform {}s {};",
            pose.y,
            pose.scale,
            self.duration,
            Ease::POWER2_OUT.css(),
        )
    }
}

pub struct HoverHandle {
    pub hovered: bool,
    pub onmouseenter: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

#[hook]
pub fn use_hover() -> HoverHandle {
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    HoverHandle { hovered: *hovered, onmouseenter, onmouseleave }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_returns_to_rest() {
        let lift = HoverLift::COUNTRY_CARD;
        assert_eq!(lift.pose(false), Pose::REST);
        assert_eq!(lift.pose(true).y, -8.0);
        assert_eq!(lift.pose(true).scale, 1.05);
    }

    #[test]
    fn enter_and_leave_share_timing() {
        let lift = HoverLift::SERVICE_CARD;
        let enter = lift.style(true);
        let leave = lift.style(false);
        let timing = |s: &str| s.split("transition:").nth(1).map(str::to_string);
        assert_eq!(timing(&enter), timing(&leave));
    }
}
