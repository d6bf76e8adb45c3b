use crate::components::{CrashKind, PowerUpKind};

/// Time resource for tracking simulation time (milliseconds)
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt_ms: u32,  // Delta time for this tick
    pub now_ms: u64, // Total elapsed time
}

impl Time {
    pub fn new(dt_ms: u32, now_ms: u64) -> Self {
        Self { dt_ms, now_ms }
    }

    pub fn advance(&mut self, dt_ms: u32) {
        self.dt_ms = dt_ms;
        self.now_ms += u64::from(dt_ms);
    }
}

/// Pipes crossed this round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, events: &mut Events) {
        self.value += 1;
        events.play(Sound::Point);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn gen_range_f32(&mut self, min: f32, max: f32) -> f32 {
        use rand::Rng;
        if max <= min {
            return min;
        }
        self.0.gen_range(min..max)
    }

    pub fn gen_range_u32(&mut self, min: u32, max: u32) -> u32 {
        use rand::Rng;
        if max <= min {
            return min;
        }
        self.0.gen_range(min..=max)
    }

    pub fn pick_kind(&mut self) -> PowerUpKind {
        use rand::seq::SliceRandom;
        *PowerUpKind::ALL
            .choose(&mut self.0)
            .unwrap_or(&PowerUpKind::SpeedBoost)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Countdown until the next power-up item appears
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerUpSpawner {
    pub t_until_ms: u32, // 0 = spawn on the next update
}

impl PowerUpSpawner {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            t_until_ms: delay_ms,
        }
    }

    pub fn start_delay(&mut self, delay_ms: u32) {
        self.t_until_ms = delay_ms;
    }

    pub fn update(&mut self, dt_ms: u32) {
        self.t_until_ms = self.t_until_ms.saturating_sub(dt_ms);
    }

    pub fn is_ready(&self) -> bool {
        self.t_until_ms == 0
    }
}

/// Fire-and-forget sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Wing,
    Hit,
    Die,
    Point,
    Pickup,
    Swoosh,
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub sounds: Vec<Sound>,
    pub crashed: Option<CrashKind>,
    pub picked_up: Vec<PowerUpKind>,
    pub expired: Vec<PowerUpKind>,
    pub pipes_passed: u32,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }

    pub fn clear(&mut self) {
        self.sounds.clear();
        self.crashed = None;
        self.picked_up.clear();
        self.expired.clear();
        self.pipes_passed = 0;
    }
}

/// Host input, already reduced to what the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Close the game
    Quit,
    /// Click, flap key or touch
    Tap,
}

/// Inputs queued by the host between ticks
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub inputs: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, input: InputEvent) {
        self.inputs.push(input);
    }

    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_add_plays_point() {
        let mut score = Score::new();
        let mut events = Events::new();
        score.add(&mut events);
        score.add(&mut events);
        assert_eq!(score.value, 2);
        assert_eq!(events.sounds, vec![Sound::Point, Sound::Point]);
        score.reset();
        assert_eq!(score.value, 0);
    }

    #[test]
    fn test_time_advance() {
        let mut time = Time::default();
        time.advance(33);
        time.advance(34);
        assert_eq!(time.dt_ms, 34);
        assert_eq!(time.now_ms, 67);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.play(Sound::Hit);
        events.crashed = Some(CrashKind::Pipe);
        events.picked_up.push(PowerUpKind::Invincible);
        events.expired.push(PowerUpKind::SmallSize);
        events.pipes_passed = 1;

        events.clear();

        assert!(events.sounds.is_empty());
        assert!(events.crashed.is_none());
        assert!(events.picked_up.is_empty());
        assert!(events.expired.is_empty());
        assert_eq!(events.pipes_passed, 0);
    }

    #[test]
    fn test_rng_is_deterministic() {
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..10 {
            assert_eq!(a.gen_range_u32(0, 1000), b.gen_range_u32(0, 1000));
            assert_eq!(a.pick_kind(), b.pick_kind());
        }
    }

    #[test]
    fn test_rng_degenerate_ranges() {
        let mut rng = GameRng::default();
        assert_eq!(rng.gen_range_f32(5.0, 5.0), 5.0);
        assert_eq!(rng.gen_range_u32(9, 3), 9);
    }

    #[test]
    fn test_spawner_countdown() {
        let mut spawner = PowerUpSpawner::new(100);
        spawner.update(60);
        assert!(!spawner.is_ready());
        spawner.update(60);
        assert!(spawner.is_ready());
        spawner.start_delay(500);
        assert!(!spawner.is_ready());
    }

    #[test]
    fn test_input_queue_drain() {
        let mut queue = InputQueue::new();
        queue.push(InputEvent::Tap);
        queue.push(InputEvent::Quit);
        assert_eq!(queue.drain(), vec![InputEvent::Tap, InputEvent::Quit]);
        assert!(queue.inputs.is_empty());
    }
}
