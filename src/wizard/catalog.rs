// ABOUTME: Static question catalog for the prompt builder wizard

use rand::seq::SliceRandom;

/// How a step collects its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Short free-form text.
    Text,
    /// Long-form script or scene fragment.
    Script,
    /// Exactly one choice from a finite option set.
    Select,
}

/// One question/input unit in the fixed wizard sequence.
#[derive(Debug, Clone)]
pub struct Step {
    /// Stable identifier the answer record is keyed by.
    pub id: &'static str,
    /// Position in the catalog, 0-based.
    pub ordinal: usize,
    /// Grouping label shown above the prompt.
    pub category: &'static str,
    /// The prompt text presented to the user.
    pub prompt: &'static str,
    pub kind: StepKind,
    /// Finite option set; only meaningful for `StepKind::Select`.
    pub options: &'static [&'static str],
    /// Example answers for the local "example" action.
    pub examples: &'static [&'static str],
    /// Hint text rendered in an empty input.
    pub placeholder: &'static str,
    /// Answer prefilled at session start; empty means no default.
    pub default_answer: &'static str,
}

impl Step {
    /// Pick a random example answer, if the step carries any.
    pub fn random_example(&self) -> Option<&'static str> {
        self.examples.choose(&mut rand::thread_rng()).copied()
    }
}

/// The fixed, ordered wizard catalog. Defined once at compile time; the
/// controller treats an empty catalog as fatal misconfiguration.
pub const CATALOG: &[Step] = &[
    Step {
        id: "scriptText",
        ordinal: 0,
        category: "Prelude (Optional)",
        prompt: "Optional: share your script fragment or scene description",
        kind: StepKind::Script,
        options: &[],
        examples: &[
            "He edits reels of his past while rain combs the window.",
            "She waits in a station bathed in crimson departures.",
            "They argue in whispers beneath the crashing surf.",
        ],
        placeholder: "Drop in a fragment if you want Dreamer to adapt pacing and continuity from the page.",
        default_answer: "",
    },
    Step {
        id: "sceneCore",
        ordinal: 1,
        category: "Scene Core & Emotion",
        prompt: "Describe your scene core — who is there, what is happening, what emotion drives it.",
        kind: StepKind::Text,
        options: &[],
        examples: &[
            "A woman reading farewell letters in a candlelit attic as thunder stirs the glass.",
            "Two siblings share a cigarette on a motel balcony overlooking neon emptiness.",
        ],
        placeholder: "e.g., A man edits reels of his past in a dark room while rain falls outside.",
        default_answer: "",
    },
    Step {
        id: "emotion",
        ordinal: 2,
        category: "Scene Core & Emotion",
        prompt: "What mood defines this scene?",
        kind: StepKind::Select,
        options: &[
            "melancholic",
            "nostalgic",
            "ethereal",
            "tragic beauty",
            "mythic surrealism",
            "serene chaos",
            "hopeful decay",
            "electric longing",
        ],
        examples: &[],
        placeholder: "melancholic, nostalgic, ethereal...",
        default_answer: "",
    },
    Step {
        id: "numberOfShots",
        ordinal: 3,
        category: "Shot System",
        prompt: "How many shots should the sequence contain?",
        kind: StepKind::Text,
        options: &[],
        examples: &["3", "5", "7"],
        placeholder: "e.g., 5 — establishing, emotional reaction, revelation, contrast, payoff",
        default_answer: "3",
    },
    Step {
        id: "cameraType",
        ordinal: 4,
        category: "Shot System",
        prompt: "Select your camera system:",
        kind: StepKind::Select,
        options: &[
            "Arri Alexa 65",
            "Red Monstro 8K",
            "Sony Venice 2",
            "Phantom Flex 4K",
            "IMAX",
            "analog Bolex H16",
        ],
        examples: &[],
        placeholder: "",
        default_answer: "Arri Alexa 65",
    },
    Step {
        id: "shotTypes",
        ordinal: 5,
        category: "Shot System",
        prompt: "Which shot types shape your sequence?",
        kind: StepKind::Text,
        options: &[],
        examples: &[
            "wide atmospheric, dolly-in confession, close-up tremor",
            "aerial drift, tracking pursuit, over-the-shoulder reveal",
        ],
        placeholder: "wide, close-up, POV, dolly-in...",
        default_answer: "",
    },
    Step {
        id: "focalLength",
        ordinal: 6,
        category: "Shot System",
        prompt: "Choose focal length:",
        kind: StepKind::Select,
        options: &[
            "10mm ultra-wide",
            "24mm immersive",
            "35mm cinematic",
            "50mm human-eye",
            "85mm intimate",
            "135mm compressed",
        ],
        examples: &[],
        placeholder: "",
        default_answer: "35mm cinematic",
    },
    Step {
        id: "depthOfField",
        ordinal: 7,
        category: "Shot System",
        prompt: "Set the depth of field:",
        kind: StepKind::Select,
        options: &[
            "f/1.4 dreamy shallow",
            "f/2.8 cinematic shallow",
            "f/5.6 balanced",
            "f/11 deep focus",
        ],
        examples: &[],
        placeholder: "",
        default_answer: "f/2.8 cinematic shallow",
    },
    Step {
        id: "framing",
        ordinal: 8,
        category: "Framing & Visual Psychology",
        prompt: "What composition defines the scene?",
        kind: StepKind::Select,
        options: &[
            "rule of thirds",
            "symmetrical",
            "negative space",
            "frame-in-frame",
            "golden ratio",
            "off-center",
            "leading lines",
            "Dutch angle",
        ],
        examples: &[],
        placeholder: "",
        default_answer: "rule of thirds",
    },
    Step {
        id: "lightingStyle",
        ordinal: 9,
        category: "Lighting & Atmosphere",
        prompt: "Choose lighting mood:",
        kind: StepKind::Select,
        options: &[
            "chiaroscuro contrast",
            "golden hour glow",
            "moonlit reflection",
            "tungsten haze",
            "silhouette rim",
            "fluorescent spill",
        ],
        examples: &[],
        placeholder: "",
        default_answer: "chiaroscuro contrast",
    },
    Step {
        id: "filmStock",
        ordinal: 10,
        category: "Film Stock & Color",
        prompt: "Select film stock:",
        kind: StepKind::Select,
        options: &[
            "Kodak Vision3 500T 5219",
            "Fuji Eterna",
            "Ilford HP5 B&W",
            "Technicolor 3-strip",
            "Polaroid pastel dream",
        ],
        examples: &[],
        placeholder: "",
        default_answer: "Kodak Vision3 500T 5219",
    },
    Step {
        id: "colorGrading",
        ordinal: 11,
        category: "Film Stock & Color",
        prompt: "Color grade vibe:",
        kind: StepKind::Select,
        options: &[
            "mutated pastel",
            "teal-orange tension",
            "noir desaturation",
            "golden warmth",
            "painterly tone",
            "infrared surreal",
        ],
        examples: &[],
        placeholder: "",
        default_answer: "teal-orange tension",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ordinals_match_positions() {
        for (i, step) in CATALOG.iter().enumerate() {
            assert_eq!(step.ordinal, i, "ordinal mismatch for {}", step.id);
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = CATALOG.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn select_steps_carry_options() {
        for step in CATALOG {
            match step.kind {
                StepKind::Select => assert!(!step.options.is_empty(), "{} has no options", step.id),
                StepKind::Text | StepKind::Script => assert!(step.options.is_empty()),
            }
        }
    }

    #[test]
    fn select_defaults_come_from_their_option_set() {
        for step in CATALOG.iter().filter(|s| s.kind == StepKind::Select) {
            if !step.default_answer.is_empty() {
                assert!(
                    step.options.contains(&step.default_answer),
                    "{} default not in options",
                    step.id
                );
            }
        }
    }
}
