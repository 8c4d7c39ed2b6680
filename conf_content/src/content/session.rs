use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{content_file_name, ContentDocument, FrontMatter};
use crate::{error::ContentError, import::SessionRecord};

/// Separates the abstract from the full description in a session body.
pub const SUMMARY_DIVIDER: &str = "<!--more-->";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TalkFormat {
    Session,
    ShortSession,
    LightningTalk,
}

impl TalkFormat {
    /// Maps the label shown on the submission form to a format.
    pub fn from_label(label: &str) -> Option<TalkFormat> {
        match label {
            "Session (40min)" => Some(TalkFormat::Session),
            "Short Session (20min)" => Some(TalkFormat::ShortSession),
            "Lightning Talk (5min)" => Some(TalkFormat::LightningTalk),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionFrontMatter {
    pub key: String,
    pub id: String,
    pub title: String,
    pub format: TalkFormat,
    pub level: String,
    pub tags: Vec<String>,
    pub speakers: Vec<String>,
    #[serde(rename = "videoId", default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presentation: Option<String>,
}

impl ContentDocument {
    pub fn for_session(record: &SessionRecord) -> Result<ContentDocument, ContentError> {
        let format = TalkFormat::from_label(&record.talk_format).ok_or_else(|| {
            ContentError::UnrecognizedFormat {
                session_id: record.id.clone(),
                value: record.talk_format.clone(),
            }
        })?;

        let front_matter = SessionFrontMatter {
            key: record.id.clone(),
            id: record.id.clone(),
            title: record.title.clone(),
            format,
            level: record.audience_level.to_lowercase(),
            tags: vec![record.id.to_uppercase()],
            speakers: vec![record.speaker_id.clone()],
            video_id: record.video_id.clone(),
            presentation: record.presentation.clone(),
        };

        Ok(ContentDocument {
            path: PathBuf::from("sessions")
                .join(content_file_name(&format!("session-{}", record.id))),
            front_matter: FrontMatter::Session(front_matter),
            body: format!(
                "{}\n{}\n{}",
                record.r#abstract, SUMMARY_DIVIDER, record.description
            ),
        })
    }
}
