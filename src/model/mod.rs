pub mod config;
pub mod indicator;
pub mod report;
pub mod session;

pub use config::{Config, DetectionConfig, TrainingConfig};
pub use indicator::{Indicator, PHISHING_INDICATORS};
pub use report::{AnalysisReport, ConfidenceLevel};
pub use session::{ConversationTurn, SessionState, SessionStatus, TurnDisposition};
