use conf_content::{generate_all, generate_partners, generate_speakers, Config, ContentWriter, GenerationReport};

#[derive(clap::Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate speaker and session pages from the speakers CSV
    Speakers,
    /// Generate partner pages from the partners CSV
    Partners,
    /// Generate everything (the default)
    All,
}

impl Command {
    pub fn run(&self, config: &Config) -> anyhow::Result<GenerationReport> {
        let writer = ContentWriter::new(&config.output_dir);
        let report = match self {
            Command::Speakers => generate_speakers(&config.speakers_path(), &writer)?,
            Command::Partners => {
                generate_partners(&config.partners_path(), &config.locale, &writer)?
            }
            Command::All => generate_all(config)?,
        };
        Ok(report)
    }
}
