//! Front matter parsing and vault file I/O

mod frontmatter;
mod vault;

pub use frontmatter::{
    DELIMITER, FrontMatter, FrontMatterError, Properties, parse_block, parse_properties, split,
};
pub use vault::{
    VaultError, create_note, decode_note_bytes, list_note_ids, note_path, read_note,
    read_note_text, scan_vault,
};
