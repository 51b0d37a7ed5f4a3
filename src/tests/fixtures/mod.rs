// Shared builders for unit and e2e tests. Every default belongs to "user-fixed-0001" so
// builders compose without extra wiring.

pub mod banks;
pub mod entries;
pub mod events {
    pub mod domain_event;
    pub mod quiz_created_v1;
}
pub mod questions;
pub mod rows;
pub mod sources;
pub mod state;
