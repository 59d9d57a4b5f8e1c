use super::BuiltinTopic;

pub const TOPIC: BuiltinTopic = BuiltinTopic {
    key: "smr",
    name: "Storage Management and Reporting",
    patterns: PATTERNS,
};

const PATTERNS: &[&str] = &[
    r"Spectrum Software",
    r"[sS]oftware[-\s]+[dD]efined",
    r"Spectrum\s+Control",
    r"Spectrum\s+Connect",
    r"Spectrum\s+Discover",
    r"Storage\s+Insights",
    r"Productivity\s+Center",
    r"ITIL",
];
