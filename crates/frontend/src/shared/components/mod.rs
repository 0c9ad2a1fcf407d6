pub mod animated_presence;

pub use animated_presence::AnimatedPresence;
