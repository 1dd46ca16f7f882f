// Handlers are organized by security tier:
// Public (no auth, read-only) → Protected (bearer token required, /api/*)
pub mod protected;
pub mod public;
