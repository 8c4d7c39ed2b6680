use std::path::PathBuf;

use serde::{Deserialize, Serialize};

mod partner;
mod session;
mod speaker;

pub use partner::PartnerFrontMatter;
pub use session::{SessionFrontMatter, TalkFormat};
pub use speaker::SpeakerFrontMatter;

pub const CONTENT_EXTENSION: &str = "md";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: String,
    pub link: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FrontMatter {
    Speaker(SpeakerFrontMatter),
    Session(SessionFrontMatter),
    Partner(PartnerFrontMatter),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Speaker,
    Session,
    Partner,
}

impl FrontMatter {
    pub fn kind(&self) -> ContentKind {
        match self {
            FrontMatter::Speaker(_) => ContentKind::Speaker,
            FrontMatter::Session(_) => ContentKind::Session,
            FrontMatter::Partner(_) => ContentKind::Partner,
        }
    }
}

/// A single output file: front matter plus a verbatim body, addressed
/// relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDocument {
    pub path: PathBuf,
    pub front_matter: FrontMatter,
    pub body: String,
}

impl ContentDocument {
    pub fn kind(&self) -> ContentKind {
        self.front_matter.kind()
    }
}

fn content_file_name(stem: &str) -> String {
    format!("{}.{}", stem, CONTENT_EXTENSION)
}
