use serde::{Deserialize, Deserializer};

pub const ACCEPTED_STATE: &str = "accepted";
pub const LOGO_PRESENT: &str = "yes";

/// Decides whether a row makes it into the generated site.
pub trait Acceptance {
    fn is_accepted(&self) -> bool;
}

/// One row of the speakers export. A row may also carry the talk the speaker gives.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct SpeakerRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub shirt_size: Option<String>,
    #[serde(default)]
    pub talk_format: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub r#abstract: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub audience_level: String,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    pub state: String,
    #[serde(default)]
    pub confirmed: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub presentation: Option<String>,
}

impl Acceptance for SpeakerRecord {
    fn is_accepted(&self) -> bool {
        self.state == ACCEPTED_STATE
    }
}

/// Talk details carried on a speaker row that has a session id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: String,
    pub title: String,
    pub r#abstract: String,
    pub description: String,
    pub talk_format: String,
    pub audience_level: String,
    pub video_id: Option<String>,
    pub presentation: Option<String>,
    pub speaker_id: String,
}

impl SpeakerRecord {
    pub fn session(&self) -> Option<SessionRecord> {
        let id = self.session_id.as_deref().filter(|id| !id.is_empty())?;

        Some(SessionRecord {
            id: id.to_string(),
            title: self.title.clone(),
            r#abstract: self.r#abstract.clone(),
            description: self.description.clone(),
            talk_format: self.talk_format.clone(),
            audience_level: self.audience_level.clone(),
            video_id: self.video_id.clone().filter(|v| !v.is_empty()),
            presentation: self.presentation.clone().filter(|p| !p.is_empty()),
            speaker_id: self.id.clone(),
        })
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PartnerRecord {
    pub key: String,
    pub title: String,
    pub category: String,
    #[serde(deserialize_with = "empty_as_zero")]
    pub order: i32,
    pub logo_exists: String,
    #[serde(default)]
    pub description: String,
}

/// Blank order cells sort as 0.
fn empty_as_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.trim().is_empty() {
        return Ok(0);
    }
    raw.trim().parse().map_err(serde::de::Error::custom)
}

impl Acceptance for PartnerRecord {
    fn is_accepted(&self) -> bool {
        self.logo_exists == LOGO_PRESENT
    }
}
