//! Line-oriented reclassification report.
//!
//! One record per line: `ACTION topic score topic score ... post-id`, with
//! topics in ranking order, e.g. `MOVE fla 6 dpr 0 https://host/post`.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use curator_core::errors::{ArchiveError, CuratorResult};
use curator_core::{Action, ClassificationResult, Topic, TopicScore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReclassificationRecord {
    pub action: Action,
    pub ranking: Vec<TopicScore>,
    pub post_id: String,
}

impl ReclassificationRecord {
    pub fn from_result(result: &ClassificationResult, post_id: &str) -> Self {
        Self {
            action: result.action,
            ranking: result.ranking.clone(),
            post_id: encode_post_id(post_id),
        }
    }

    /// Leading entry of the ranking: the recommended topic.
    pub fn top(&self) -> Option<&TopicScore> {
        self.ranking.first()
    }

    /// Parse one report line. `line_no` is 1-based and only used in errors.
    pub fn parse(line: &str, line_no: usize) -> Result<Self, ArchiveError> {
        let malformed = |reason: String| ArchiveError::MalformedRecord {
            line: line_no,
            reason,
        };

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (action, rest) = tokens
            .split_first()
            .ok_or_else(|| malformed("empty line".into()))?;
        let action: Action = action.parse().map_err(malformed)?;

        let (post_id, pairs) = rest
            .split_last()
            .ok_or_else(|| malformed("missing post id".into()))?;
        if pairs.is_empty() {
            return Err(malformed("no topic scores".into()));
        }
        if pairs.len() % 2 != 0 {
            return Err(malformed(format!(
                "expected topic/score pairs before the post id, got {} tokens",
                pairs.len()
            )));
        }

        let ranking = pairs
            .chunks_exact(2)
            .map(|pair| {
                let topic = Topic::new(pair[0]).map_err(|e| malformed(e.to_string()))?;
                let score = pair[1]
                    .parse::<u32>()
                    .map_err(|e| malformed(format!("bad score '{}': {e}", pair[1])))?;
                Ok(TopicScore { topic, score })
            })
            .collect::<Result<Vec<_>, ArchiveError>>()?;

        Ok(Self {
            action,
            ranking,
            post_id: post_id.to_string(),
        })
    }
}

impl fmt::Display for ReclassificationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.action)?;
        for entry in &self.ranking {
            write!(f, " {} {}", entry.topic, entry.score)?;
        }
        write!(f, " {}", self.post_id)
    }
}

/// Percent-encode whitespace so a post id is a single report token.
///
/// Permalinks are already URL-safe; this matters for file-name ids such as
/// `2020-01-01-dpr001 copy.html`. Encoding an encoded id is a no-op.
pub fn encode_post_id(id: &str) -> String {
    let mut encoded = String::with_capacity(id.len());
    for c in id.chars() {
        if c.is_whitespace() {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                encoded.push_str(&format!("%{byte:02X}"));
            }
        } else {
            encoded.push(c);
        }
    }
    encoded
}

/// Records read back from a report, plus the lines that did not parse.
#[derive(Debug, Default)]
pub struct ParsedReport {
    pub records: Vec<ReclassificationRecord>,
    pub malformed: Vec<ArchiveError>,
}

/// Write records to any sink, one per line.
pub fn write_records<W: Write>(mut out: W, records: &[ReclassificationRecord]) -> io::Result<()> {
    for record in records {
        writeln!(out, "{record}")?;
    }
    out.flush()
}

/// Write a report file, replacing any existing one.
pub fn write_report(path: &Path, records: &[ReclassificationRecord]) -> CuratorResult<()> {
    let io_err = |e| ArchiveError::io(path.display().to_string(), e);
    let file = File::create(path).map_err(io_err)?;
    write_records(BufWriter::new(file), records).map_err(io_err)?;
    Ok(())
}

/// Parse report text. Blank lines are skipped.
pub fn parse_report(text: &str) -> ParsedReport {
    let mut parsed = ParsedReport::default();
    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match ReclassificationRecord::parse(line, index + 1) {
            Ok(record) => parsed.records.push(record),
            Err(e) => parsed.malformed.push(e),
        }
    }
    parsed
}

/// Read and parse a report file.
pub fn read_report(path: &Path) -> CuratorResult<ParsedReport> {
    let text = fs::read_to_string(path)
        .map_err(|e| ArchiveError::io(path.display().to_string(), e))?;
    Ok(parse_report(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> ReclassificationRecord {
        ReclassificationRecord::parse(line, 1).unwrap()
    }

    #[test]
    fn parses_and_formats_a_line() {
        let r = record("MOVE fla 6 dpr 0 tap 0 https://host/post");
        assert_eq!(r.action, Action::Move);
        assert_eq!(r.ranking.len(), 3);
        assert_eq!(r.top().unwrap().topic, "fla");
        assert_eq!(r.top().unwrap().score, 6);
        assert_eq!(r.post_id, "https://host/post");
        assert_eq!(r.to_string(), "MOVE fla 6 dpr 0 tap 0 https://host/post");
    }

    #[test]
    fn tolerates_extra_whitespace() {
        // Older reports carry a double space before the id.
        let r = record("EVAL fob 3 tap 3  2018-11-20-dpr044.html");
        assert_eq!(r.post_id, "2018-11-20-dpr044.html");
        assert_eq!(r.to_string(), "EVAL fob 3 tap 3 2018-11-20-dpr044.html");
    }

    #[test]
    fn rejects_malformed_lines() {
        let cases = [
            ("SHIFT fla 6 id", "unknown action"),
            ("MOVE fla 6 dpr id", "pairs"),
            ("MOVE fla six id", "bad score"),
            ("MOVE", "missing post id"),
            ("KEEP id", "no topic scores"),
            ("KEEP FLA 3 id", "topic key"),
        ];
        for (line, expected) in cases {
            let err = ReclassificationRecord::parse(line, 7).unwrap_err();
            match err {
                ArchiveError::MalformedRecord { line: 7, ref reason } => {
                    assert!(reason.contains(expected), "{line}: {reason}")
                }
                other => panic!("{line}: unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn whitespace_in_post_ids_is_percent_encoded() {
        assert_eq!(encode_post_id("a b\tc"), "a%20b%09c");
        assert_eq!(encode_post_id("https://host/post"), "https://host/post");
        assert_eq!(encode_post_id("a\u{a0}b"), "a%C2%A0b");
        assert_eq!(encode_post_id(&encode_post_id("a b")), "a%20b");
    }

    #[test]
    fn parse_report_skips_blank_lines_and_collects_errors() {
        let text = "MOVE fla 6 dpr 0 a\n\n   \nbogus\nKEEP dpr 1 fla 0 b\n";
        let parsed = parse_report(text);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.malformed.len(), 1);
        assert!(matches!(
            parsed.malformed[0],
            ArchiveError::MalformedRecord { line: 4, .. }
        ));
    }
}
