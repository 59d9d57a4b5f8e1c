use super::BuiltinTopic;

pub const TOPIC: BuiltinTopic = BuiltinTopic {
    key: "san",
    name: "Storage Area Networks (SAN)",
    patterns: PATTERNS,
};

const PATTERNS: &[&str] = &[
    // ── Transports ─────────────────────────────────────────────────────────
    r"[bB]luetooth",
    r"[eE]thernet",
    r"Infiniband",
    r"iSCSI",
    r"TCP/IP",
    r"FCIP",
    r"[SL]AN\W",
    r"(Storage|Local|Metro)\s+Area\s+Network",
    // ── Vendors and products ───────────────────────────────────────────────
    r"Brocade",
    r"Broadcom",
    r"Cisco",
    r"B-type",
    r"VersaStack",
    // ── Concepts ───────────────────────────────────────────────────────────
    r"[cC]onnectivity",
    r"[cC]onverged",
    r"[wW]iring",
];
