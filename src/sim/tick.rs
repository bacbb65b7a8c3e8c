//! One simulation tick
//!
//! Integrate every dog, then detect overlaps on the post-move state, then
//! resolve them one pair at a time in enumeration order. A dog caught in two
//! overlaps is resolved twice, the second time using the velocity left by
//! the first; this order dependence is intentional.

use super::collision::{detect_collisions, pair_mut, resolve_collision};
use super::integrate::{PowerTransition, integrate_body};
use super::rng::RandomSource;
use super::state::{SimEvent, Simulation};

/// Advance the simulation by one tick
pub fn step<R: RandomSource>(sim: &mut Simulation<R>) {
    sim.events.clear();
    sim.time_ticks += 1;

    for body in &mut sim.bodies {
        let outcome = integrate_body(body, &sim.config, &mut sim.rng);
        if outcome.walls.any() {
            sim.events.push(SimEvent::WallBounce {
                body: body.id,
                x_axis: outcome.walls.x,
                y_axis: outcome.walls.y,
            });
        }
        match outcome.power {
            Some(PowerTransition::Triggered) => {
                sim.events.push(SimEvent::PoweredUp { body: body.id });
            }
            Some(PowerTransition::Expired) => {
                sim.events.push(SimEvent::PowerExpired { body: body.id });
            }
            None => {}
        }
    }

    let pairs = detect_collisions(&sim.bodies, sim.config.body_size());
    for (i, j) in pairs {
        let (a, b) = pair_mut(&mut sim.bodies, i, j);
        resolve_collision(a, b);
        log::debug!(
            "Tick {}: {} hit {} (hits {}/{})",
            sim.time_ticks,
            a.name,
            b.name,
            a.hit_count,
            b.hit_count
        );
        sim.events.push(SimEvent::Collision { a: a.id, b: b.id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::body::{BodySpec, PowerState};
    use crate::sim::rng::FixedSource;
    use glam::Vec2;

    fn sim_with(config: SimConfig, specs: Vec<BodySpec>) -> Simulation<FixedSource> {
        Simulation::new(config, specs, FixedSource::NEVER).expect("valid simulation")
    }

    #[test]
    fn test_step_advances_tick_and_moves() {
        let mut sim = sim_with(
            SimConfig::default(),
            vec![BodySpec::new("Rex", Vec2::new(100.0, 100.0), Vec2::new(2.0, 1.0), 1.0)],
        );
        sim.step();

        assert_eq!(sim.time_ticks(), 1);
        assert_eq!(sim.bodies()[0].pos(), Vec2::new(102.0, 101.0));
        assert!(sim.events().is_empty());
    }

    #[test]
    fn test_head_on_collision_scenario() {
        // Overlapping after the move; walls far away
        let config = SimConfig {
            friction: 1.0,
            ..Default::default()
        };
        let mut sim = sim_with(
            config,
            vec![
                BodySpec::new("A", Vec2::new(200.0, 200.0), Vec2::new(3.0, 0.0), 1.0),
                BodySpec::new("B", Vec2::new(230.0, 200.0), Vec2::new(-1.0, 0.0), 2.0),
            ],
        );
        sim.step();

        let a = &sim.bodies()[0];
        let b = &sim.bodies()[1];
        assert!((a.vel().x - (-7.0 / 3.0)).abs() < 1e-5);
        assert!((b.vel().x - 5.0 / 3.0).abs() < 1e-5);
        assert_eq!(a.hit_count(), 1);
        assert_eq!(b.hit_count(), 1);
        assert_eq!(sim.events(), &[SimEvent::Collision { a: 0, b: 1 }]);
    }

    #[test]
    fn test_no_separation_after_collision() {
        let config = SimConfig {
            friction: 1.0,
            ..Default::default()
        };
        let mut sim = sim_with(
            config,
            vec![
                BodySpec::new("A", Vec2::new(200.0, 200.0), Vec2::ZERO, 1.0),
                BodySpec::new("B", Vec2::new(210.0, 200.0), Vec2::ZERO, 1.0),
            ],
        );
        sim.step();
        // Still overlapping and still counted: no position correction
        assert_eq!(sim.bodies()[0].pos(), Vec2::new(200.0, 200.0));
        sim.step();
        assert_eq!(sim.bodies()[0].hit_count(), 2);
    }

    #[test]
    fn test_triple_overlap_resolves_sequentially() {
        let config = SimConfig {
            friction: 1.0,
            ..Default::default()
        };
        let mut sim = sim_with(
            config,
            vec![
                BodySpec::new("A", Vec2::new(200.0, 200.0), Vec2::new(1.0, 0.0), 1.0),
                BodySpec::new("B", Vec2::new(210.0, 200.0), Vec2::new(2.0, 0.0), 1.0),
                BodySpec::new("C", Vec2::new(220.0, 200.0), Vec2::new(3.0, 0.0), 1.0),
            ],
        );
        sim.step();

        // Pairs (0,1), (0,2), (1,2), each an equal-mass swap on current values:
        // (1,2,3) -> (2,1,3) -> (3,1,2) -> (3,2,1)
        let vx: Vec<f32> = sim.bodies().iter().map(|b| b.vel().x).collect();
        assert_eq!(vx, vec![3.0, 2.0, 1.0]);
        assert_eq!(sim.bodies()[0].hit_count(), 2);
        assert_eq!(sim.bodies()[1].hit_count(), 2);
        assert_eq!(sim.bodies()[2].hit_count(), 2);
    }

    #[test]
    fn test_huge_masses_keep_bodies_in_arena() {
        let config = SimConfig::default();
        let max = config.max_position();
        let mut sim = sim_with(
            config,
            vec![
                BodySpec::new("A", Vec2::new(200.0, 200.0), Vec2::new(1.0, 0.0), 3.0e38),
                BodySpec::new("B", Vec2::new(210.0, 200.0), Vec2::new(-1.0, 0.0), 2.0e38),
            ],
        );
        for _ in 0..5 {
            sim.step();
        }

        for dog in sim.bodies() {
            assert!(dog.vel().is_finite(), "{} velocity {:?}", dog.name(), dog.vel());
            assert!(dog.pos().cmpge(Vec2::ZERO).all() && dog.pos().cmple(max).all());
        }
        assert!(sim.bodies()[0].hit_count() >= 1);
    }

    #[test]
    fn test_wall_event() {
        let mut sim = sim_with(
            SimConfig::default(),
            vec![BodySpec::new("Rex", Vec2::new(1.0, 100.0), Vec2::new(-3.0, 0.0), 1.0)],
        );
        sim.step();

        let rex = &sim.bodies()[0];
        assert_eq!(rex.pos().x, 0.0);
        assert!(rex.vel().x > 0.0);
        assert_eq!(
            sim.events(),
            &[SimEvent::WallBounce {
                body: 0,
                x_axis: true,
                y_axis: false
            }]
        );
    }

    #[test]
    fn test_power_up_cycle_events() {
        let config = SimConfig {
            power_duration: 2,
            ..Default::default()
        };
        let mut sim = Simulation::new(
            config,
            vec![BodySpec::new("Rex", Vec2::new(300.0, 200.0), Vec2::ZERO, 1.0)],
            FixedSource {
                unit: 0.0,
                angle: std::f32::consts::FRAC_PI_2,
            },
        )
        .expect("valid simulation");

        sim.step();
        assert_eq!(sim.events(), &[SimEvent::PoweredUp { body: 0 }]);
        assert!(sim.bodies()[0].is_powered());

        sim.step();
        assert!(sim.events().is_empty());
        assert_eq!(sim.bodies()[0].power().timer(), 1);

        sim.step();
        assert_eq!(sim.events(), &[SimEvent::PowerExpired { body: 0 }]);
        assert_eq!(sim.bodies()[0].power(), PowerState::Normal);
    }

    #[test]
    fn test_events_cleared_each_tick() {
        let mut sim = sim_with(
            SimConfig::default(),
            vec![BodySpec::new("Rex", Vec2::new(1.0, 100.0), Vec2::new(-3.0, 0.0), 1.0)],
        );
        sim.step();
        assert_eq!(sim.events().len(), 1);
        sim.step();
        assert!(sim.events().is_empty());
    }
}
