use super::BuiltinTopic;

pub const TOPIC: BuiltinTopic = BuiltinTopic {
    key: "fla",
    name: "Flash Storage",
    patterns: PATTERNS,
};

const PATTERNS: &[&str] = &[
    // ── Flash and solid state ──────────────────────────────────────────────
    r"A9000",
    r"[aA]ll-flash",
    r"FlashSystem",
    r"\WSSD",
    r"[sS]olid[-\s]+[sS]tate",
    r"NAND",
    r"NVMe",
    r"[fF]irmware",
    r"[SD]RAM",
    r"RAMSan",
    r"RAID",
    r"Texas\s+Memory\s+Systems",
    // ── Disk systems ───────────────────────────────────────────────────────
    r"EMC\W",
    r"Celerra",
    r"CLARiiON",
    r"Storwize",
    r"\WXIV",
    r"[mM]odel 314",
    // ── Virtualization ─────────────────────────────────────────────────────
    r"Spectrum\s+Accelerate",
    r"Spectrum\s+Virtualize",
    r"SAN\s+Volume\s+Controller",
    r"[sS]torage\s+[vV]irtualization",
    r"SVC",
];
