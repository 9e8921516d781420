//! Domain data served by the HTTP layer

pub mod vibes;
