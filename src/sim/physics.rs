//! Avatar physics: gravity, flap impulses, clamped vertical motion
//!
//! Physics never fails. Out-of-range positions are reported by the
//! collision detector, not here.

use crate::assets::{BIRD_FRAME_COUNT, SpriteMetrics};
use crate::consts::*;

use super::state::Avatar;

impl Avatar {
    /// Apply the one-frame flap impulse. Callers gate on legality
    /// (`y > 0`); an illegal flap is silently ignored upstream, not an
    /// error.
    pub fn flap(&mut self) {
        self.vel_y = FLAP_IMPULSE;
    }

    /// Advance one tick: gravity unless a flap fired this frame, then the
    /// clamped position update.
    ///
    /// The step is clamped so that a large downward velocity cannot
    /// displace the avatar past the ground in a single tick. A hard stop,
    /// not a bounce; the ceiling clamps the same way.
    pub fn advance(&mut self, flapped: bool, metrics: &SpriteMetrics) {
        if !flapped && self.vel_y < MAX_FALL_SPEED {
            self.vel_y += GRAVITY;
        }
        let floor = GROUND_LINE - metrics.bird.h;
        let step = self.vel_y.min(floor - self.pos.y);
        self.pos.y = (self.pos.y + step).clamp(0.0, floor);
    }

    /// Advance the cyclic sprite frame on the fixed cadence, independent of
    /// physics.
    pub fn animate(&mut self, frame_counter: u64) {
        if frame_counter % ANIM_PERIOD_TICKS == 0 {
            self.frame = (self.frame + 1) % BIRD_FRAME_COUNT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn metrics() -> SpriteMetrics {
        SpriteMetrics::CLASSIC
    }

    #[test]
    fn gravity_accumulates_linearly_from_rest() {
        let mut avatar = Avatar::new();
        avatar.pos.y = 0.0;
        avatar.vel_y = 0.0;

        let mut last_y = avatar.pos.y;
        for frame in 1..=5 {
            avatar.advance(false, &metrics());
            assert_eq!(avatar.vel_y, frame as f32 * GRAVITY);
            assert!(avatar.pos.y > last_y, "y must increase monotonically");
            last_y = avatar.pos.y;
        }
    }

    #[test]
    fn fall_speed_is_capped() {
        let mut avatar = Avatar::new();
        avatar.vel_y = 0.0;
        for _ in 0..100 {
            avatar.advance(false, &metrics());
        }
        assert_eq!(avatar.vel_y, MAX_FALL_SPEED);
    }

    #[test]
    fn flap_overrides_gravity_for_the_frame() {
        let mut avatar = Avatar::new();
        avatar.vel_y = MAX_FALL_SPEED;
        let y = avatar.pos.y;

        avatar.flap();
        avatar.advance(true, &metrics());
        assert_eq!(avatar.vel_y, FLAP_IMPULSE);
        assert_eq!(avatar.pos.y, y + FLAP_IMPULSE);

        // Next frame without a flap, gravity resumes
        avatar.advance(false, &metrics());
        assert_eq!(avatar.vel_y, FLAP_IMPULSE + GRAVITY);
    }

    #[test]
    fn ground_clamp_is_a_hard_stop() {
        let mut avatar = Avatar::new();
        let floor = GROUND_LINE - metrics().bird.h;
        avatar.pos.y = floor - 2.0;
        avatar.vel_y = 50.0;

        avatar.advance(false, &metrics());
        assert_eq!(avatar.pos.y, floor);

        // Once grounded the clamp holds position, it does not bounce
        avatar.advance(false, &metrics());
        assert_eq!(avatar.pos.y, floor);
    }

    #[test]
    fn animation_cycles_on_the_fixed_cadence() {
        let mut avatar = Avatar::new();
        let start = avatar.frame;

        for tick in 1..ANIM_PERIOD_TICKS {
            avatar.animate(tick);
            assert_eq!(avatar.frame, start);
        }
        avatar.animate(ANIM_PERIOD_TICKS);
        assert_eq!(avatar.frame, (start + 1) % BIRD_FRAME_COUNT);

        // Full cycle returns to the first frame
        for tick in (ANIM_PERIOD_TICKS + 1)..=(ANIM_PERIOD_TICKS * BIRD_FRAME_COUNT as u64) {
            avatar.animate(tick);
        }
        assert_eq!(avatar.frame, start);
    }

    proptest! {
        /// y stays inside [0, ground - bird height] after any advance,
        /// regardless of the incoming velocity.
        #[test]
        fn y_stays_in_bounds(
            y in 0.0f32..=384.0,
            vel in -1000.0f32..1000.0,
            flapped: bool,
        ) {
            let m = metrics();
            let mut avatar = Avatar::new();
            avatar.pos.y = y;
            avatar.vel_y = vel;
            avatar.advance(flapped, &m);
            let floor = GROUND_LINE - m.bird.h;
            prop_assert!(avatar.pos.y >= 0.0);
            prop_assert!(avatar.pos.y <= floor);
        }
    }
}
