use std::time::{Duration, Instant};

/// Trait for types that can be interpolated.
pub trait Interpolatable: Sized + Clone {
    fn interpolate(&self, target: &Self, t: f64) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        self + (target - self) * t as f32
    }
}

impl Interpolatable for f64 {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        self + (target - self) * t
    }
}

impl Interpolatable for u8 {
    fn interpolate(&self, target: &Self, t: f64) -> Self {
        ((*self as f64) + ((*target as f64) - (*self as f64)) * t)
            .round()
            .clamp(0.0, 255.0) as u8
    }
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - 4.0 * (1.0 - t) * (1.0 - t) * (1.0 - t)
    }
}

/// Time-based tween. The caller supplies `now` so the tween is deterministic
/// under test; a zero duration completes on the first update.
pub struct Animator<T>
where
    T: Interpolatable,
{
    pub from: T,
    pub to: T,
    pub duration: Duration,
    pub start_time: Option<Instant>,
    pub ease_fn: fn(f64) -> f64,
    pub animating: bool,
    pub last_value: T,
}

impl<T> Animator<T>
where
    T: Interpolatable,
{
    pub fn new(from: T, to: T, ease_fn: fn(f64) -> f64) -> Self {
        Self {
            from: from.clone(),
            to: to.clone(),
            duration: Duration::ZERO,
            start_time: None,
            ease_fn,
            animating: false,
            last_value: from,
        }
    }

    pub fn start_from(&mut self, from: T, to: T, duration: Duration, now: Instant) {
        self.from = from.clone();
        self.to = to;
        self.duration = duration;
        self.start_time = Some(now);
        self.animating = true;
        self.last_value = from;
    }

    pub fn start(&mut self, to: T, duration: Duration, now: Instant) {
        self.start_from(self.last_value.clone(), to, duration, now);
    }

    /// Returns Some(new_value) while animating, None once finished.
    pub fn update(&mut self, now: Instant) -> Option<T> {
        if !self.animating {
            return None;
        }

        if self.duration.is_zero() {
            self.animating = false;
            self.last_value = self.to.clone();
            return Some(self.to.clone());
        }

        let start = self.start_time.unwrap();
        let elapsed = now.saturating_duration_since(start).as_secs_f64();
        let mut t = (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        if t >= 1.0 {
            t = 1.0;
            self.animating = false;
        }
        let eased_t = (self.ease_fn)(t);
        let value = self.from.interpolate(&self.to, eased_t);
        self.last_value = value.clone();
        Some(value)
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn current_value(&self) -> &T {
        &self.last_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(t: f64) -> f64 {
        t
    }

    #[test]
    fn test_animator_reaches_target() {
        let now = Instant::now();
        let mut animator = Animator::new(0.0_f64, 0.0, linear);
        animator.start(80.0, Duration::from_millis(200), now);

        let value = animator.update(now + Duration::from_millis(300)).unwrap();
        assert_eq!(value, 80.0);
        assert!(!animator.is_animating());
        assert!(animator.update(now + Duration::from_millis(400)).is_none());
    }

    #[test]
    fn test_animator_midpoint_is_interpolated() {
        let now = Instant::now();
        let mut animator = Animator::new(0.0_f64, 0.0, linear);
        animator.start(100.0, Duration::from_millis(200), now);

        let value = animator.update(now + Duration::from_millis(100)).unwrap();
        assert!((value - 50.0).abs() < 1.0e-6);
        assert!(animator.is_animating());
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let now = Instant::now();
        let mut animator = Animator::new(10.0_f64, 0.0, ease_in_out_cubic);
        animator.start(25.0, Duration::ZERO, now);

        assert_eq!(animator.update(now), Some(25.0));
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_restart_continues_from_last_value() {
        let now = Instant::now();
        let mut animator = Animator::new(0.0_f64, 0.0, linear);
        animator.start(100.0, Duration::from_millis(100), now);
        animator.update(now + Duration::from_millis(50));

        animator.start(0.0, Duration::from_millis(100), now + Duration::from_millis(50));
        assert_eq!(*animator.current_value(), 50.0);
        assert_eq!(
            animator.update(now + Duration::from_millis(150)),
            Some(0.0)
        );
    }

    #[test]
    fn test_ease_in_out_cubic_boundaries() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
    }
}
