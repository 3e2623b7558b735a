//! Fixed sentence templates and enhancer phrases.

use crate::category::Category;

/// Placeholder replaced by the enhanced reason. Each template has exactly one.
pub const PLACEHOLDER: &str = "{reason}";

const PROFESSIONAL: &[&str] = &[
    "I couldn't attend the meeting because {reason}, which led to an unexpected quantum fluctuation in my calendar.",
    "The deadline was missed because {reason}. My productivity algorithm needs a critical update.",
    "I'll need to reschedule because {reason}. My personal AI assistant double-booked me.",
    "The project is delayed because {reason}. My neural pathways were temporarily rerouted to solve a cosmic mystery.",
    "I can't make it to work today because {reason}. My biorhythm synchronization is undergoing maintenance.",
    "The report will be late because {reason}. My cognitive bandwidth was temporarily allocated elsewhere.",
    "I missed your email because {reason}. My digital perception filters were calibrated incorrectly.",
];

const PERSONAL: &[&str] = &[
    "I forgot your birthday because {reason}. My memory banks were undergoing a critical update.",
    "I didn't call back because {reason}. My communication protocols were corrupted by a surge of emotions.",
    "I'm running late because {reason}. My temporal perception matrix is experiencing glitches today.",
    "I couldn't make it to dinner because {reason}. My teleportation device malfunctioned at the last moment.",
    "I didn't do the dishes because {reason}. My domestic responsibility algorithm needed recalibration.",
    "I forgot to pick up the groceries because {reason}. My errand-execution subroutine encountered a critical error.",
    "I haven't texted back because {reason}. My digital response generator is experiencing unexpected latency.",
];

const SOCIAL: &[&str] = &[
    "I'm leaving the party early because {reason}. My social energy reserves have reached critical levels.",
    "I can't attend your event because {reason}. My social calendar experienced a catastrophic overflow error.",
    "I didn't RSVP because {reason}. My decision-making cortex was temporarily offline.",
    "I've been quiet lately because {reason}. My extroversion circuits required extensive maintenance.",
    "I'll have to skip the gathering because {reason}. My social interaction battery needs recharging.",
    "I was late to the meetup because {reason}. My navigation algorithms were recalibrating to the area's quantum fluctuations.",
    "I didn't join the video call because {reason}. My digital presence matrix was experiencing dimensional instability.",
];

const DEFAULT: &[&str] = &[
    "I couldn't do it because {reason}. The universe conspired against me in the most spectacular fashion.",
    "It didn't happen because {reason}. The cosmic timing wasn't aligned with my personal energy field.",
    "I failed to deliver because {reason}. My reality distortion field unexpectedly malfunctioned.",
    "I missed it because {reason}. An unexpected glitch in the space-time continuum occurred.",
    "I didn't manage because {reason}. My quantum entanglement with the task was temporarily severed.",
    "It slipped my mind because {reason}. A temporary hiatus in my consciousness continuum occurred.",
    "I overlooked it because {reason}. My attention was diverted by an anomaly in the fabric of reality.",
];

/// Descriptors placed in front of the user's reason.
pub const ENHANCERS: &[&str] = &[
    "remarkably inconvenient",
    "cosmically unfortunate",
    "absurdly timed",
    "existentially challenging",
    "metaphysically disruptive",
    "quantumly improbable",
    "philosophically perplexing",
    "universally ill-timed",
    "paradoxically predictable",
    "ironically perfect",
];

/// Templates for a category.
pub fn templates_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Professional => PROFESSIONAL,
        Category::Personal => PERSONAL,
        Category::Social => SOCIAL,
        Category::Default => DEFAULT,
    }
}

/// `"a <enhancer> <reason>"`.
pub fn enhance(enhancer: &str, reason: &str) -> String {
    format!("a {enhancer} {reason}")
}

/// Substitute the first placeholder in `template` with `enhanced`.
pub fn fill(template: &str, enhanced: &str) -> String {
    template.replacen(PLACEHOLDER, enhanced, 1)
}
