// Composition root of the binary.
//
// - Reads config from the environment.
// - Instantiates the infrastructure adapters.
// - Wires adapters into use case handlers and listeners.
// - Spawns the background workers (outbox relay, quiz projector, Kafka listeners).

pub mod config;
pub mod state;
pub mod workers;
