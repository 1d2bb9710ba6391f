//! Classifier configuration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::datetime::EventTimeFormatter;
use crate::error::ClassifyError;

/// Runtime configuration for classification.
///
/// The `version` field tracks behavioral revisions of the classifier;
/// version 0 is reserved and rejected. The event-time formatter is the
/// explicit locale/timezone collaborator used to render calendar events;
/// there is no process-wide default, so two concurrent classifications with
/// different locales cannot interfere. The default configuration carries no
/// formatter: classifying a calendar event then surfaces
/// [`ClassifyError::MissingEventTimeFormatter`] instead of silently picking
/// a locale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// Semantic version of the classification configuration.
    pub version: u32,
    /// Locale/timezone collaborator for rendering calendar event times.
    /// Not serialized; callers supply it explicitly.
    #[serde(skip)]
    pub event_time: Option<Arc<dyn EventTimeFormatter>>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            version: 1,
            event_time: None,
        }
    }
}

impl ClassifyConfig {
    /// Configuration with the given event-time formatter.
    pub fn with_event_time(formatter: Arc<dyn EventTimeFormatter>) -> Self {
        Self {
            version: 1,
            event_time: Some(formatter),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ClassifyError> {
        if self.version == 0 {
            return Err(ClassifyError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
