//! Animation presets shared by every surface, with a reduced-motion switch.
//!
//! Values are in seconds and CSS pixels. When reduced motion is on, every
//! variant jumps straight to its end state.

use serde::Serialize;

/// Environment variable that forces reduced motion when truthy.
pub const REDUCE_MOTION_ENV: &str = "REDUCE_MOTION";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spring {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
}

impl Spring {
    pub const GENTLE: Self = Self::new(30.0, 300.0, 1.0);
    pub const SNAPPY: Self = Self::new(25.0, 400.0, 0.8);
    pub const BOUNCY: Self = Self::new(12.0, 300.0, 1.0);
    pub const SOFT: Self = Self::new(40.0, 200.0, 1.2);

    #[must_use]
    pub const fn new(damping: f32, stiffness: f32, mass: f32) -> Self {
        Self {
            damping,
            stiffness,
            mass,
        }
    }
}

pub const DURATION_FAST: f32 = 0.15;
pub const DURATION_BASE: f32 = 0.3;
pub const DURATION_SLOW: f32 = 0.6;

/// Cubic-bezier control points.
pub const EASE: [f32; 4] = [0.25, 0.1, 0.25, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Keyframe {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Keyframe {
    pub const REST: Self = Self {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transition {
    Spring(Spring),
    Tween { duration: f32, ease: [f32; 4] },
}

impl Transition {
    pub const INSTANT: Self = Self::Tween {
        duration: 0.0,
        ease: EASE,
    };

    #[must_use]
    pub const fn tween(duration: f32) -> Self {
        Self::Tween {
            duration,
            ease: EASE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Variant {
    pub from: Keyframe,
    pub to: Keyframe,
    pub transition: Transition,
}

impl Variant {
    #[must_use]
    pub const fn fade() -> Self {
        Self {
            from: Keyframe {
                opacity: 0.0,
                ..Keyframe::REST
            },
            to: Keyframe::REST,
            transition: Transition::tween(DURATION_BASE),
        }
    }

    #[must_use]
    pub const fn slide_up() -> Self {
        Self {
            from: Keyframe {
                opacity: 0.0,
                y: 20.0,
                ..Keyframe::REST
            },
            to: Keyframe::REST,
            transition: Transition::Spring(Spring::GENTLE),
        }
    }

    #[must_use]
    pub const fn scale_in() -> Self {
        Self {
            from: Keyframe {
                opacity: 0.0,
                scale: 0.95,
                ..Keyframe::REST
            },
            to: Keyframe::REST,
            transition: Transition::Spring(Spring::SNAPPY),
        }
    }

    /// Horizontal jolt that settles through an underdamped spring.
    #[must_use]
    pub const fn alert_shake() -> Self {
        Self {
            from: Keyframe {
                x: -8.0,
                ..Keyframe::REST
            },
            to: Keyframe::REST,
            transition: Transition::Spring(Spring::BOUNCY),
        }
    }

    /// Apply the motion preference: reduced motion starts at the end state
    /// and takes no time.
    #[must_use]
    pub const fn resolve(self, preference: MotionPreference) -> Self {
        match preference {
            MotionPreference::Full => self,
            MotionPreference::Reduced => Self {
                from: self.to,
                to: self.to,
                transition: Transition::INSTANT,
            },
        }
    }
}

/// Named variants, in display order.
#[must_use]
pub const fn variants() -> [(&'static str, Variant); 4] {
    [
        ("fade", Variant::fade()),
        ("slide_up", Variant::slide_up()),
        ("scale_in", Variant::scale_in()),
        ("alert_shake", Variant::alert_shake()),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionPreference {
    Full,
    Reduced,
}

impl MotionPreference {
    /// Reduced when the config flag is set or `REDUCE_MOTION` is truthy.
    #[must_use]
    pub fn detect(config_flag: bool) -> Self {
        Self::from_sources(config_flag, std::env::var(REDUCE_MOTION_ENV).ok().as_deref())
    }

    fn from_sources(config_flag: bool, env: Option<&str>) -> Self {
        let env_flag = env.is_some_and(|v| {
            matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on" | "reduce"
            )
        });
        if config_flag || env_flag {
            Self::Reduced
        } else {
            Self::Full
        }
    }

    #[must_use]
    pub const fn is_reduced(self) -> bool {
        matches!(self, Self::Reduced)
    }
}

/// Start delay for each of `count` items revealed in sequence.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn stagger_delays(count: usize, step: f32, preference: MotionPreference) -> Vec<f32> {
    if preference.is_reduced() {
        return vec![0.0; count];
    }
    (0..count).map(|i| i as f32 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn gentle_spring_values() {
        assert_eq!(Spring::GENTLE, Spring::new(30.0, 300.0, 1.0));
        assert_eq!(Spring::SOFT.mass, 1.2);
    }

    #[test]
    fn full_motion_keeps_variant() {
        let v = Variant::slide_up();
        assert_eq!(v.resolve(MotionPreference::Full), v);
        assert_eq!(v.from.y, 20.0);
    }

    #[test]
    fn reduced_motion_is_static() {
        for (name, variant) in variants() {
            let resolved = variant.resolve(MotionPreference::Reduced);
            assert_eq!(resolved.from, resolved.to, "{name}");
            assert_eq!(resolved.to, Keyframe::REST, "{name}");
            assert_eq!(resolved.transition, Transition::INSTANT, "{name}");
        }
    }

    #[rstest]
    #[case(false, None, MotionPreference::Full)]
    #[case(true, None, MotionPreference::Reduced)]
    #[case(false, Some("1"), MotionPreference::Reduced)]
    #[case(false, Some("TRUE"), MotionPreference::Reduced)]
    #[case(false, Some("0"), MotionPreference::Full)]
    #[case(false, Some(""), MotionPreference::Full)]
    fn preference_sources(
        #[case] flag: bool,
        #[case] env: Option<&str>,
        #[case] expected: MotionPreference,
    ) {
        assert_eq!(MotionPreference::from_sources(flag, env), expected);
    }

    #[test]
    fn stagger() {
        assert_eq!(
            stagger_delays(4, 0.25, MotionPreference::Full),
            vec![0.0, 0.25, 0.5, 0.75]
        );
        assert_eq!(stagger_delays(3, 0.05, MotionPreference::Reduced), vec![0.0; 3]);
        assert!(stagger_delays(0, 0.1, MotionPreference::Full).is_empty());
    }
}
