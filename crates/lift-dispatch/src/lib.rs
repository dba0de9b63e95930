//! `lift-dispatch` — the dispatch brain of a multi-cabin lift bank.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                        |
//! |-----------------|-----------------------------------------------------------------|
//! | [`calls`]       | `CallTable` — pending hall calls per floor and direction         |
//! | [`scheduler`]   | `DestinationScheduler` — sweep-ordered queue insertion          |
//! | [`sweep`]       | "coming towards" tests, terminal flip, closest-cabin choice      |
//! | [`assignment`]  | `Assignment` — what happened to a new hall call                  |
//! | [`passing`]     | `StopReason`, stop-while-passing decision                       |
//! | [`idle`]        | `IdleRoute`, pressed-floor and hall-call targets for idle cabins |
//! | [`event`]       | `Event` enum consumed by the dispatcher                         |
//! | [`dispatcher`]  | `Dispatcher` — routes events, returns `Command`s                |
//! | [`error`]       | `DispatchError`, `DispatchResult<T>`                            |
//!
//! # Event flow
//!
//! ```text
//! Up/DownButtonPressed  → record call → already coming? / extend en-route / dispatch idle / wait
//! FloorButtonPressed    → schedule floor in the cabin's sweep
//! PassingFloor          → stop for a drop-off, or a pick-up with room to spare
//! StoppedAtFloor        → clear served calls, set direction lamps
//! Idle                  → pressed floors first, else the outermost uncovered call
//! ```
//!
//! Handlers run one at a time and never block.  Everything they want done
//! outside the dispatcher comes back as `Vec<Command>`.

pub mod assignment;
pub mod calls;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod idle;
pub mod passing;
pub mod scheduler;
pub mod sweep;


pub use assignment::Assignment;
pub use calls::CallTable;
pub use dispatcher::Dispatcher;
pub use error::{DispatchError, DispatchResult};
pub use event::Event;
pub use idle::IdleRoute;
pub use passing::StopReason;
pub use scheduler::DestinationScheduler;
