use serde::Serialize;

use rcv_content::motion::{
    self, DURATION_BASE, DURATION_FAST, DURATION_SLOW, EASE, MotionPreference, Spring, Variant,
};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MotionArgs;
use crate::context::AppContext;
use crate::output::output;

const STAGGER_ITEMS: usize = 5;
const STAGGER_STEP: f32 = 0.1;

#[derive(Debug, Serialize)]
struct Durations {
    fast: f32,
    base: f32,
    slow: f32,
}

#[derive(Debug, Serialize)]
struct NamedSpring {
    name: &'static str,
    #[serde(flatten)]
    spring: Spring,
}

#[derive(Debug, Serialize)]
struct NamedVariant {
    name: &'static str,
    #[serde(flatten)]
    variant: Variant,
}

#[derive(Debug, Serialize)]
struct MotionTokens {
    preference: MotionPreference,
    springs: Vec<NamedSpring>,
    durations: Durations,
    ease: [f32; 4],
    variants: Vec<NamedVariant>,
    stagger: Vec<f32>,
}

/// Handle `rcv motion`: print the motion tokens resolved for the current preference.
pub fn handle(args: &MotionArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let preference = if args.reduced {
        MotionPreference::Reduced
    } else {
        ctx.motion_preference()
    };
    output(&tokens(preference), flags.format)
}

fn tokens(preference: MotionPreference) -> MotionTokens {
    let springs = [
        ("gentle", Spring::GENTLE),
        ("snappy", Spring::SNAPPY),
        ("bouncy", Spring::BOUNCY),
        ("soft", Spring::SOFT),
    ]
    .into_iter()
    .map(|(name, spring)| NamedSpring { name, spring })
    .collect();
    let variants = motion::variants()
        .into_iter()
        .map(|(name, variant)| NamedVariant {
            name,
            variant: variant.resolve(preference),
        })
        .collect();
    MotionTokens {
        preference,
        springs,
        durations: Durations {
            fast: DURATION_FAST,
            base: DURATION_BASE,
            slow: DURATION_SLOW,
        },
        ease: EASE,
        variants,
        stagger: motion::stagger_delays(STAGGER_ITEMS, STAGGER_STEP, preference),
    }
}

#[cfg(test)]
mod tests {
    use super::tokens;
    use rcv_content::motion::MotionPreference;

    #[test]
    fn reduced_tokens_have_no_stagger() {
        let reduced = tokens(MotionPreference::Reduced);
        assert!(reduced.stagger.iter().all(|d| *d == 0.0));
        assert_eq!(reduced.variants.len(), 4);

        let full = tokens(MotionPreference::Full);
        assert!(full.stagger[1] > 0.0);
    }
}
