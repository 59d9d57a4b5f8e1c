use super::BuiltinTopic;

pub const TOPIC: BuiltinTopic = BuiltinTopic {
    key: "dpr",
    name: "Data Protection Software",
    patterns: PATTERNS,
};

const PATTERNS: &[&str] = &[
    // ── Products ───────────────────────────────────────────────────────────
    r"ADSTAR",
    r"ADSM",
    r"Tivoli\s+Storage\s+Manager",
    r"Spectrum\s+Protect",
    r"SPTA",
    r"Technical Advisor",
    r"Actifio",
    r"Veritas",
    r"NetBackup",
    r"Commvault",
    // ── Concepts ───────────────────────────────────────────────────────────
    r"[bB]ackup",
    r"achiv(e|ing)",
    r"BaaS",
    r"\WILM",
    r"[iI]nformation\s+[lL]ifecycle\s+[mM]anage",
    r"[cC]ompliance",
    r"[rR]egulat(ion|ory)",
    r"[rR]ecover(y|ing)",
    r"[rR]estor(e|ing)",
    r"Business\s+Continuity",
];
