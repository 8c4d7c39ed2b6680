use std::path::Path;

use assert_matches::assert_matches;
use conf_content::{
    content::{PartnerFrontMatter, SessionFrontMatter, SpeakerFrontMatter, TalkFormat},
    generate_all, generate_partners, generate_speakers, Config, ContentError, ContentWriter,
    SocialLink,
};
use itertools::Itertools;
use tempfile::TempDir;

const SPEAKER_HEADER: &str =
    "id,name,bio,twitter,url,organization,talk_format,title,abstract,description,audience_level,state,session_id,video_id";

fn write_input(dir: &TempDir, name: &str, header: &str, rows: &[&str]) -> Result<(), anyhow::Error> {
    let content = std::iter::once(header).chain(rows.iter().copied()).join("\n");
    std::fs::write(dir.path().join(name), content + "\n")?;
    Ok(())
}

fn split_document(path: &Path) -> Result<(String, String), anyhow::Error> {
    let content = std::fs::read_to_string(path)?;
    let rest = content
        .strip_prefix("---\n")
        .ok_or_else(|| anyhow::anyhow!("Missing opening delimiter in {}", path.display()))?;
    let (front_matter, body) = rest
        .split_once("\n---\n")
        .ok_or_else(|| anyhow::anyhow!("Missing closing delimiter in {}", path.display()))?;
    Ok((front_matter.to_string(), body.to_string()))
}

fn listed_files(dir: &Path) -> Vec<String> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .sorted()
            .collect(),
        Err(_) => vec![],
    }
}

#[test]
fn test_accepted_speaker_is_written() -> Result<(), anyhow::Error> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write_input(
        &input,
        "speakers.csv",
        SPEAKER_HEADER,
        &["s1,Alice,Loves Go.,alice,https://github.com/alice,Example Inc.,,,,,,accepted,,"],
    )?;

    let report = generate_speakers(
        &input.path().join("speakers.csv"),
        &ContentWriter::new(output.path()),
    )?;

    assert_eq!(report.speakers, 1);
    assert_eq!(report.sessions, 0);

    let (front_matter, body) = split_document(&output.path().join("speakers/s1.md"))?;
    let parsed = serde_yaml::from_str::<SpeakerFrontMatter>(&front_matter)?;

    assert_eq!(
        parsed,
        SpeakerFrontMatter {
            key: "s1".into(),
            name: "Alice".into(),
            id: "s1".into(),
            company: "Example Inc.".into(),
            feature: false,
            photo_url: "/images/speakers/speaker-s1.jpg".into(),
            socials: vec![
                SocialLink {
                    icon: "twitter".into(),
                    link: "https://twitter.com/alice".into(),
                    name: "alice".into(),
                },
                SocialLink {
                    icon: "github".into(),
                    link: "https://github.com/alice".into(),
                    name: "alice".into(),
                },
            ],
        }
    );
    assert_eq!(body, "Loves Go.");

    Ok(())
}

#[test]
fn test_rejected_speakers_are_skipped() -> Result<(), anyhow::Error> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write_input(
        &input,
        "speakers.csv",
        SPEAKER_HEADER,
        &[
            "s1,Alice,,,,,,,,,,rejected,,",
            "s2,Bob,,,,,,,,,,accepted,,",
            "s3,Carol,,,,,,,,,,pending,,",
        ],
    )?;

    let report = generate_speakers(
        &input.path().join("speakers.csv"),
        &ContentWriter::new(output.path()),
    )?;

    assert_eq!(report.rows_read, 3);
    assert_eq!(report.rows_skipped, 2);
    assert_eq!(listed_files(&output.path().join("speakers")), vec!["s2.md"]);

    Ok(())
}

#[test]
fn test_session_is_written_next_to_speaker() -> Result<(), anyhow::Error> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write_input(
        &input,
        "speakers.csv",
        SPEAKER_HEADER,
        &["s1,Alice,,,,,Lightning Talk (5min),Fast builds,Short.,Long.,Beginner,accepted,b2,abc123"],
    )?;

    let report = generate_speakers(
        &input.path().join("speakers.csv"),
        &ContentWriter::new(output.path()),
    )?;

    assert_eq!(report.documents_written(), 2);

    let (front_matter, body) = split_document(&output.path().join("sessions/session-b2.md"))?;
    let parsed = serde_yaml::from_str::<SessionFrontMatter>(&front_matter)?;

    assert_eq!(
        parsed,
        SessionFrontMatter {
            key: "b2".into(),
            id: "b2".into(),
            title: "Fast builds".into(),
            format: TalkFormat::LightningTalk,
            level: "beginner".into(),
            tags: vec!["B2".into()],
            speakers: vec!["s1".into()],
            video_id: Some("abc123".into()),
            presentation: None,
        }
    );
    assert_eq!(body, "Short.\n<!--more-->\nLong.");

    Ok(())
}

#[test]
fn test_unrecognized_format_aborts_run() -> Result<(), anyhow::Error> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write_input(
        &input,
        "speakers.csv",
        SPEAKER_HEADER,
        &[
            "s1,Alice,,,,,Session (40min),One,,,Advanced,accepted,a1,",
            "s2,Bob,,,,,Workshop (2h),Two,,,Advanced,accepted,a2,",
            "s3,Carol,,,,,Session (40min),Three,,,Advanced,accepted,a3,",
        ],
    )?;

    let result = generate_speakers(
        &input.path().join("speakers.csv"),
        &ContentWriter::new(output.path()),
    );

    assert_matches!(result, Err(ContentError::UnrecognizedFormat { .. }));
    assert_eq!(listed_files(&output.path().join("speakers")), vec!["s1.md"]);
    assert_eq!(
        listed_files(&output.path().join("sessions")),
        vec!["session-a1.md"]
    );

    Ok(())
}

#[test]
fn test_partners_without_logo_are_skipped() -> Result<(), anyhow::Error> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write_input(
        &input,
        "partners.csv",
        "key,title,category,order,logo_exists,description",
        &[
            "acme,Acme Corp,gold,1,yes,Makes anvils.",
            "globex,Globex,gold,2,no,",
            "initech,Initech,silver,1,yes,TPS reports.",
        ],
    )?;

    let report = generate_partners(
        &input.path().join("partners.csv"),
        "ja",
        &ContentWriter::new(output.path()),
    )?;

    assert_eq!(report.partners, 2);
    assert_eq!(report.rows_skipped, 1);
    assert_eq!(listed_files(&output.path().join("partners/gold")), vec!["acme.md"]);

    let (front_matter, body) = split_document(&output.path().join("partners/silver/initech.md"))?;
    let parsed = serde_yaml::from_str::<PartnerFrontMatter>(&front_matter)?;

    assert_eq!(parsed.order, 1);
    assert_eq!(parsed.logo, "/images/partners/logo-initech.png");
    assert_eq!(parsed.lang, "ja");
    assert_eq!(body, "TPS reports.");

    Ok(())
}

#[test]
fn test_blank_partner_order_does_not_abort_run() -> Result<(), anyhow::Error> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write_input(
        &input,
        "partners.csv",
        "key,title,category,order,logo_exists,description",
        &["acme,Acme,gold,1,yes,A", "globex,Globex,gold,,no,", "hooli,Hooli,gold,,yes,"],
    )?;

    let report = generate_partners(
        &input.path().join("partners.csv"),
        "ja",
        &ContentWriter::new(output.path()),
    )?;

    assert_eq!(report.partners, 2);
    assert_eq!(
        listed_files(&output.path().join("partners/gold")),
        vec!["acme.md", "hooli.md"]
    );

    let (front_matter, _) = split_document(&output.path().join("partners/gold/hooli.md"))?;
    assert_eq!(serde_yaml::from_str::<PartnerFrontMatter>(&front_matter)?.order, 0);

    Ok(())
}

#[test]
fn test_generate_all_uses_configured_directories() -> Result<(), anyhow::Error> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;
    write_input(
        &input,
        "speakers.csv",
        SPEAKER_HEADER,
        &["s1,Alice,,,,,,,,,,accepted,,"],
    )?;
    write_input(
        &input,
        "sponsors.csv",
        "key,title,category,order,logo_exists,description",
        &["acme,Acme Corp,gold,1,yes,"],
    )?;

    let config = Config {
        input_dir: input.path().to_path_buf(),
        output_dir: output.path().join("content"),
        partners_file: "sponsors.csv".into(),
        locale: "en".into(),
        ..Default::default()
    };

    let report = generate_all(&config)?;

    assert_eq!(report.speakers, 1);
    assert_eq!(report.partners, 1);
    assert!(output.path().join("content/speakers/s1.md").is_file());

    let (front_matter, _) = split_document(&output.path().join("content/partners/gold/acme.md"))?;
    assert_eq!(serde_yaml::from_str::<PartnerFrontMatter>(&front_matter)?.lang, "en");

    Ok(())
}

#[test]
fn test_missing_input_is_reported() -> Result<(), anyhow::Error> {
    let input = tempfile::tempdir()?;
    let output = tempfile::tempdir()?;

    let result = generate_speakers(
        &input.path().join("speakers.csv"),
        &ContentWriter::new(output.path()),
    );

    assert_matches!(result, Err(ContentError::FileNotFound { .. }));
    assert!(listed_files(output.path()).is_empty());

    Ok(())
}
