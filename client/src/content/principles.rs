use super::Principle;

pub const PRINCIPLES: &[Principle] = &[
    Principle {
        title: "Roots before rockets",
        description: "Core statistical thinking and traditional ML remain essential. I use LLMs where they add leverage, not as a default.",
    },
    Principle {
        title: "AI as an amplifier",
        description: "The win is better problem framing, faster iteration, and clearer decisions, not replacing experts.",
    },
    Principle {
        title: "Measure > magic",
        description: "Ship, measure, iterate. If it doesn't move a metric, it's a demo.",
    },
];

pub const PHILOSOPHY_HEADLINE: &str = "AI isn't replacing data scientists, it's redefining us.";

pub const PHILOSOPHY_BODY: &str = "I treat AI as a force multiplier on top of solid DS/ML foundations\u{2014}better problem framing, faster experiments, and more aligned outcomes.";
