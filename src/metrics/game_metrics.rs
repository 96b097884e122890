use std::time::{Duration, Instant};

/// Play-time and game counters shown next to the score
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub games_played: u32,
    /// Clock stops once the current game is over
    pub running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            games_played: 0,
            running: true,
        }
    }

    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.running = true;
    }

    pub fn on_game_over(&mut self) {
        self.update();
        self.games_played += 1;
        self.running = false;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_games_played_counter() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over();
        metrics.on_game_start();
        metrics.on_game_over();

        assert_eq!(metrics.games_played, 2);
    }

    #[test]
    fn test_clock_stops_on_game_over() {
        let mut metrics = GameMetrics::new();
        metrics.start_time = Instant::now() - Duration::from_secs(5);
        metrics.on_game_over();
        let frozen = metrics.elapsed_time;
        assert!(frozen >= Duration::from_secs(5));

        std::thread::sleep(Duration::from_millis(20));
        metrics.update();
        assert_eq!(metrics.elapsed_time, frozen);
    }

    #[test]
    fn test_game_start_resets_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.elapsed_time.as_millis() >= 50);

        metrics.on_game_start();
        metrics.update();
        assert!(metrics.elapsed_time.as_millis() < 50);
    }
}
