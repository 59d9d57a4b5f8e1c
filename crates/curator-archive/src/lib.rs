//! # curator-archive
//!
//! Everything between a directory of saved post pages and a reclassification
//! report: inferring each post's current topic from its file name, pulling
//! title and body text out of the HTML, classifying posts in parallel, and
//! reading and writing the line-oriented report and move plan.

pub mod batch;
pub mod extract;
pub mod naming;
pub mod plan;
pub mod report;

pub use batch::{BatchReport, BatchScanner, PostOutcome, SkippedPost, TopicTally};
pub use extract::HtmlExtractor;
pub use naming::TopicNaming;
pub use plan::{MovePlan, MoveRequest, RejectedRecord};
pub use report::{
    encode_post_id, read_report, write_report, ParsedReport, ReclassificationRecord,
};
