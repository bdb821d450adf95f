//! Engine-agnostic AI kernel primitives: blackboard, errors, sensors, and tick context.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod blackboard;
pub mod diagnostics;
pub mod error;
pub mod registry;
pub mod rng;
pub mod sensor;
pub mod tick;

pub use agent::{tick_agents, Agent};
pub use blackboard::{BbKey, Blackboard, BlackboardValue, ChangeCallback};
pub use error::{AiError, AiResult};
pub use registry::{lock_blackboard, shared_blackboard, BlackboardRegistry, SharedBlackboard};
pub use rng::{derive_seed, RandomSource, SplitMix64};
pub use sensor::{Sensor, Sensors};
pub use tick::{Clock, TickContext};
