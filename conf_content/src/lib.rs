pub mod config;
pub mod content;
pub mod error;
pub mod import;
pub mod pipeline;
pub mod writer;

pub use config::Config;
pub use content::{ContentDocument, FrontMatter, SocialLink};
pub use error::ContentError;
pub use pipeline::{generate_all, generate_partners, generate_speakers, GenerationReport};
pub use writer::ContentWriter;
