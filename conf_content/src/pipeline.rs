use std::path::Path;

use tracing::{debug, info};

use crate::{
    config::Config,
    content::{ContentDocument, ContentKind},
    error::ContentError,
    import::{read_records, Acceptance, PartnerRecord, SpeakerRecord},
    writer::ContentWriter,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub speakers: usize,
    pub sessions: usize,
    pub partners: usize,
}

impl GenerationReport {
    fn record_written(&mut self, kind: ContentKind) {
        match kind {
            ContentKind::Speaker => self.speakers += 1,
            ContentKind::Session => self.sessions += 1,
            ContentKind::Partner => self.partners += 1,
        }
    }

    pub fn documents_written(&self) -> usize {
        self.speakers + self.sessions + self.partners
    }
}

impl std::ops::AddAssign for GenerationReport {
    fn add_assign(&mut self, other: Self) {
        self.rows_read += other.rows_read;
        self.rows_skipped += other.rows_skipped;
        self.speakers += other.speakers;
        self.sessions += other.sessions;
        self.partners += other.partners;
    }
}

/// Writes a speaker page for every accepted row, plus a session page for rows
/// that carry a session id. Stops at the first failing row.
pub fn generate_speakers(
    input: &Path,
    writer: &ContentWriter,
) -> Result<GenerationReport, ContentError> {
    let speakers: Vec<SpeakerRecord> = read_records(input)?;
    let mut report = GenerationReport {
        rows_read: speakers.len(),
        ..Default::default()
    };

    for speaker in speakers.iter() {
        if !speaker.is_accepted() {
            debug!("Skipping speaker {} with state {:?}", speaker.id, speaker.state);
            report.rows_skipped += 1;
            continue;
        }

        // Map the session before writing anything so a bad talk format leaves no file for this row
        let session = speaker
            .session()
            .map(|s| ContentDocument::for_session(&s))
            .transpose()?;

        let documents = std::iter::once(ContentDocument::for_speaker(speaker)).chain(session);
        for document in documents {
            writer.write(&document)?;
            report.record_written(document.kind());
        }
    }

    info!(
        "Generated {} speakers and {} sessions from {} ({} rows skipped)",
        report.speakers,
        report.sessions,
        input.display(),
        report.rows_skipped
    );
    Ok(report)
}

pub fn generate_partners(
    input: &Path,
    locale: &str,
    writer: &ContentWriter,
) -> Result<GenerationReport, ContentError> {
    let partners: Vec<PartnerRecord> = read_records(input)?;
    let mut report = GenerationReport {
        rows_read: partners.len(),
        ..Default::default()
    };

    for partner in partners.iter() {
        if !partner.is_accepted() {
            debug!("Skipping partner {} without logo", partner.key);
            report.rows_skipped += 1;
            continue;
        }

        let document = ContentDocument::for_partner(partner, locale);
        writer.write(&document)?;
        report.record_written(document.kind());
    }

    info!(
        "Generated {} partners from {} ({} rows skipped)",
        report.partners,
        input.display(),
        report.rows_skipped
    );
    Ok(report)
}

/// Speakers (with their sessions) first, then partners.
pub fn generate_all(config: &Config) -> Result<GenerationReport, ContentError> {
    let writer = ContentWriter::new(&config.output_dir);

    let mut report = generate_speakers(&config.speakers_path(), &writer)?;
    report += generate_partners(&config.partners_path(), &config.locale, &writer)?;

    Ok(report)
}
