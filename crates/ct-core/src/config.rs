//! Configuration for a Comedy Tools session.

/// Shortest allowed animation tick in milliseconds.
pub const MIN_TICK_MS: u64 = 10;

/// Longest allowed animation tick in milliseconds.
pub const MAX_TICK_MS: u64 = 1000;

/// Configuration for a tool board and its front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolsConfig {
    /// RNG seed for reproducible picks. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Milliseconds per animation tick.
    pub tick_ms: u64,
    /// Whether results play an entrance animation.
    pub animate: bool,
    /// Ticks between successive cards appearing on start-up.
    pub stagger_ticks: u32,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_ms: 50,
            animate: true,
            stagger_ticks: 2,
        }
    }
}

impl ToolsConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the tick length (clamped to 10-1000 ms).
    pub fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
        self
    }

    /// Turn off entrance animations and the staggered reveal.
    pub fn without_animation(mut self) -> Self {
        self.animate = false;
        self.stagger_ticks = 0;
        self
    }

    /// Set the ticks between cards appearing.
    pub fn with_stagger(mut self, ticks: u32) -> Self {
        self.stagger_ticks = ticks;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ToolsConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.tick_ms, 50);
        assert!(cfg.animate);
        assert_eq!(cfg.stagger_ticks, 2);
    }

    #[test]
    fn builder_methods() {
        let cfg = ToolsConfig::default()
            .with_seed(123)
            .with_tick_ms(80)
            .with_stagger(5);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.tick_ms, 80);
        assert_eq!(cfg.stagger_ticks, 5);
    }

    #[test]
    fn tick_clamped() {
        assert_eq!(ToolsConfig::default().with_tick_ms(0).tick_ms, 10);
        assert_eq!(ToolsConfig::default().with_tick_ms(60_000).tick_ms, 1000);
    }

    #[test]
    fn without_animation_drops_stagger() {
        let cfg = ToolsConfig::default().without_animation();
        assert!(!cfg.animate);
        assert_eq!(cfg.stagger_ticks, 0);
    }
}
