use super::BuiltinTopic;

pub const TOPIC: BuiltinTopic = BuiltinTopic {
    key: "tap",
    name: "Tape Storage",
    patterns: PATTERNS,
};

const PATTERNS: &[&str] = &[
    // ── Media ──────────────────────────────────────────────────────────────
    r"\W[tT]ape",
    r"[cC]artridge",
    r"LTO",
    r"Linear\s+Tape\s+Open",
    r"Ultrium",
    r"LTFS",
    // ── Systems ────────────────────────────────────────────────────────────
    r"TS[1234]\d\d\d",
    r"Data\s+Domain",
    r"Spectrum\s+Archive",
    r"[vV]irtual\s+[tT]ape",
    r"\WVTL",
    r"\WATL",
    r"[aA]ir[-\s][gG]ap",
];
