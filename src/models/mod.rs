pub mod conf;
pub mod note_node;
pub mod note_properties;
pub mod session;

pub use conf::Conf;
pub use note_node::{NodeKind, NoteNode};
pub use note_properties::NoteProperties;
pub use session::NoteSession;
