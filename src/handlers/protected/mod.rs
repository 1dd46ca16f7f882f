// Protected handlers: every route passes the bearer-token gate first and
// receives the verified caller as an AuthUser extension.
// Route prefix: /api/*
pub mod journal;
