use super::BuiltinTopic;

pub const TOPIC: BuiltinTopic = BuiltinTopic {
    key: "fob",
    name: "File and Object Storage",
    patterns: PATTERNS,
};

const PATTERNS: &[&str] = &[
    // ── File ───────────────────────────────────────────────────────────────
    r"GPFS",
    r"Spectrum\s+Scale",
    r"\WNAS",
    r"\WCIFS",
    r"\WNFS",
    r"Isilon",
    r"\WESS",
    r"Elastic\s+Storage\s+Server",
    // ── Object ─────────────────────────────────────────────────────────────
    r"\WCOS",
    r"ATMOS",
    r"[oO]bject\s+[sS]torage",
    r"[cC]loud\s+[sS]torage",
    r"Ceph",
    r"Amazon\s+S3",
    r"Clever[sS]afe",
    r"\WCAS\W",
    r"[cC]ontent[ -][aA]ddressable",
];
