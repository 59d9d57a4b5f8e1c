use super::BuiltinTopic;

pub const TOPIC: BuiltinTopic = BuiltinTopic {
    key: "mfr",
    name: "Mainframe Storage",
    patterns: PATTERNS,
};

const PATTERNS: &[&str] = &[
    r"DS8[013]00",
    r"DS8[789]\d\d",
    r"TS7\d\d\d",
    r"Symmetrix",
    r"ChuckH",
    r"Hollis",
    r"Yoshida",
    r"\WHDS",
    r"Hitachi",
];
