use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{content_file_name, ContentDocument, FrontMatter};
use crate::import::PartnerRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PartnerFrontMatter {
    pub key: String,
    pub title: String,
    pub category: String,
    pub order: i32,
    pub logo: String,
    pub lang: String,
}

impl ContentDocument {
    pub fn for_partner(record: &PartnerRecord, locale: &str) -> ContentDocument {
        let front_matter = PartnerFrontMatter {
            key: record.key.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            order: record.order,
            logo: format!("/images/partners/logo-{}.png", record.key),
            lang: locale.into(),
        };

        ContentDocument {
            path: PathBuf::from("partners")
                .join(&record.category)
                .join(content_file_name(&record.key)),
            front_matter: FrontMatter::Partner(front_matter),
            body: record.description.clone(),
        }
    }
}
