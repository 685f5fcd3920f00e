//! `tp-env` — the environment-provider capability.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`provider`]  | `EnvProvider` trait — wind/current/wave lookups             |
//! | [`calm`]      | `CalmEnvironment` — always-neutral placeholder              |
//! | [`synthetic`] | `SyntheticEnvironment` — seeded deterministic forecast      |
//! | [`error`]     | `EnvError`, `EnvResult<T>`                                  |
//!
//! # Design notes
//!
//! The simulation core depends only on the [`EnvProvider`] trait, injected at
//! engine construction.  A failed lookup is information ("value unavailable"),
//! not a fault: the engine substitutes the neutral sample and carries on, so
//! provider implementations are free to fail fast rather than invent data.
//!
//! Real networked forecast sources live outside this workspace; they
//! implement the same trait.  Any caching they do is their own instance-local
//! state — the core never caches, and repeated identical runs repeat
//! identical queries, so a provider must tolerate being asked the same
//! (coordinate, instant) many times.

pub mod calm;
pub mod error;
pub mod provider;
pub mod synthetic;


pub use calm::CalmEnvironment;
pub use error::{EnvError, EnvResult};
pub use provider::EnvProvider;
pub use synthetic::SyntheticEnvironment;
