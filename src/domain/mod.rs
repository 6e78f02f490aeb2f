//! Core types: Note, WikiLink, VaultIds, the check battery and its report

mod autolink;
mod checks;
mod evaluate;
mod note;
mod note_name;
mod report;
mod vault_ids;
mod wikilink;

pub use autolink::link_known_notes;
pub use checks::{
    AliasesResolve, BlankLineAfterFrontMatter, Check, CheckError, CheckOutcome, CodeBlocksClosed,
    HasFrontMatter, HeadingLevelsMonotonic, LinksExist, PropertiesParseClean,
    RequiredPropertiesPresent, TagsPresent, TitleHeadingPresent,
};
pub use evaluate::{DEFAULT_REQUIRED_PROPERTIES, Evaluator, EvaluatorConfig, evaluate};
pub use note::{FENCE, Heading, Note};
pub use note_name::{NoteName, ParseNoteNameError};
pub use report::{CheckResult, EvaluationReport};
pub use vault_ids::VaultIds;
pub use wikilink::{WikiLink, extract_wiki_links};
