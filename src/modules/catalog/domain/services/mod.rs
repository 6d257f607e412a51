pub mod episode_matcher;
pub mod fallback_chain;
pub mod resolution_observer;

pub use episode_matcher::{find_episode, require_episode, EpisodeNumber};
pub use fallback_chain::{describe_failures, Acceptable, ChainOutcome, FallbackChain};
pub use resolution_observer::{
    AttemptFailure, Intent, NoopObserver, ObserverSet, ResolutionContext, ResolutionObserver,
};
