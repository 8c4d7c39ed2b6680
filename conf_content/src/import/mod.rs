pub mod csv_reader;
pub mod records;

pub use csv_reader::{parse_records, read_records};
pub use records::{Acceptance, PartnerRecord, SessionRecord, SpeakerRecord};
