//! Vellum Core Runtime
//!
//! Foundational primitives shared by the Vellum crates:
//!
//! - **Events**: Pointer and focus events delivered by the host windowing system
//! - **State Machines**: Flat transition tables driving widget interaction states
//!
//! # Example
//!
//! ```rust
//! use vellum_core::fsm::StateMachine;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Door { Closed, Open }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Push { Open, Close }
//!
//! let mut fsm = StateMachine::builder(Door::Closed)
//!     .on(Door::Closed, Push::Open, Door::Open)
//!     .on(Door::Open, Push::Close, Door::Closed)
//!     .build();
//!
//! assert_eq!(fsm.send(Push::Open), Some(Door::Open));
//! assert_eq!(fsm.send(Push::Open), None);
//! ```

pub mod events;
pub mod fsm;

pub use events::{Event, EventData, EventType};
pub use fsm::{StateMachine, StateMachineBuilder, Transition};
