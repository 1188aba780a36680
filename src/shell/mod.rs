// Composition root for the identity issuance contract.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into the transaction handlers.
// - Start the serving loop (shell/main.rs).

pub mod config;
pub mod http;
pub mod state;
