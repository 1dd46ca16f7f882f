// Public handlers: no credential required, no caller context.
// Route prefix: none (e.g. /journal, /journal/search/:title)
pub mod journal;
