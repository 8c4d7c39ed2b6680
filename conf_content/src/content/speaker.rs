use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{content_file_name, ContentDocument, FrontMatter, SocialLink};
use crate::import::SpeakerRecord;

pub const GITHUB_URL_PREFIX: &str = "https://github.com/";
const TWITTER_URL_PREFIX: &str = "https://twitter.com/";
const WEBSITE_LINK_NAME: &str = "website";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpeakerFrontMatter {
    pub key: String,
    pub name: String,
    pub id: String,
    pub company: String,
    pub feature: bool,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub socials: Vec<SocialLink>,
}

fn social_links(record: &SpeakerRecord) -> Vec<SocialLink> {
    let mut socials = vec![];

    if let Some(handle) = record.twitter.as_deref().filter(|h| !h.is_empty()) {
        socials.push(SocialLink {
            icon: "twitter".into(),
            link: format!("{}{}", TWITTER_URL_PREFIX, handle),
            name: handle.into(),
        });
    }

    if let Some(url) = record.url.as_deref().filter(|u| !u.is_empty()) {
        let (icon, name) = match url.strip_prefix(GITHUB_URL_PREFIX) {
            Some(account) => ("github", account),
            None => ("link", WEBSITE_LINK_NAME),
        };
        socials.push(SocialLink {
            icon: icon.into(),
            link: url.into(),
            name: name.into(),
        });
    }

    socials
}

impl ContentDocument {
    pub fn for_speaker(record: &SpeakerRecord) -> ContentDocument {
        let front_matter = SpeakerFrontMatter {
            key: record.id.clone(),
            name: record.name.clone(),
            id: record.id.clone(),
            company: record.organization.clone(),
            feature: false,
            photo_url: format!("/images/speakers/speaker-{}.jpg", record.id),
            socials: social_links(record),
        };

        ContentDocument {
            path: PathBuf::from("speakers").join(content_file_name(&record.id)),
            front_matter: FrontMatter::Speaker(front_matter),
            body: record.bio.clone(),
        }
    }
}
