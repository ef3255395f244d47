//! Simulation state and the per-tick update
//!
//! [`SimulationState`] owns everything that changes during play: the player,
//! the arena walls, the enemy and bullet registries, pending events and the
//! clock. The orchestrator calls [`SimulationState::step`] once per frame and
//! reads events and snapshots back out.
//!
//! Resolution policy: only walls push bodies out of overlap. Player/enemy
//! contact consumes the enemy, and enemy/bullet contact consumes both.

mod render;

pub use render::{RenderSink, RenderSnapshot};

use crate::behavior::{Behavior, BehaviorContext};
use crate::config::{ConfigError, SimulationConfig};
use crate::entity::{Entity, EntityKind, SpriteHandle};
use crate::events::{EventQueue, GameEvent};
use crate::foundation::math::{utils, Vec2, Vec3};
use crate::foundation::time::Clock;
use crate::physics::{
    integrate, integrate_all, resolve, test_collision_with, world_collider, CollisionLayers,
    PhysicsError,
};
use crate::registry::{EntityId, EntityRegistry};
use crate::spatial::{self, BroadPhase};

/// Simulation errors
#[derive(thiserror::Error, Debug)]
pub enum SimulationError {
    /// Collision or entity construction failed
    #[error("Physics error: {0}")]
    Physics(#[from] PhysicsError),

    /// Configuration could not be used
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// `spawn_enemy` was asked for a non-enemy kind
    #[error("{0:?} is not an enemy kind")]
    NotAnEnemy(EntityKind),
}

/// Player intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    /// Desired thrust direction; magnitudes above one are normalized
    pub acceleration: Vec2,
    /// Absolute aim in degrees, `None` keeps the current heading
    pub aim_angle: Option<f32>,
    /// Fire button held; a bullet spawns on the press edge only
    pub fire: bool,
}

/// Complete mutable state of a running game
pub struct SimulationState {
    config: SimulationConfig,
    player: Entity,
    walls: Vec<Entity>,
    enemies: EntityRegistry,
    bullets: EntityRegistry,
    events: EventQueue,
    broad_phase: Box<dyn BroadPhase>,
    clock: Clock,
    fire_held: bool,
}

impl SimulationState {
    /// Build the arena, player and empty registries from a configuration
    ///
    /// # Errors
    ///
    /// `Config` when validation fails.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let player = Entity::builder(EntityKind::Player)
            .half_extent(config.player.half_extent)
            .drag(config.player.drag)
            .speed(config.player.speed)
            .angle(90.0)
            .sprite(SpriteHandle(config.player.sprite))
            .build()?;
        let walls = build_walls(&config)?;
        let broad_phase = spatial::from_config(&config.collision);

        log::info!(
            "simulation ready: arena {}x{}, broad phase {}",
            config.arena.half_width * 2.0,
            config.arena.half_height * 2.0,
            broad_phase.name()
        );

        Ok(Self {
            player,
            walls,
            enemies: EntityRegistry::with_capacity(config.registry_capacity),
            bullets: EntityRegistry::with_capacity(config.registry_capacity),
            events: EventQueue::new(),
            broad_phase,
            clock: Clock::new(),
            fire_held: false,
            config,
        })
    }

    /// Replace the enemy/bullet broad phase
    pub fn set_broad_phase(&mut self, broad_phase: Box<dyn BroadPhase>) {
        log::debug!("broad phase switched to {}", broad_phase.name());
        self.broad_phase = broad_phase;
    }

    /// Spawn an enemy of `kind` with tuning from the configuration
    ///
    /// # Errors
    ///
    /// `NotAnEnemy` for non-enemy kinds, `Physics` for a non-finite position.
    pub fn spawn_enemy(
        &mut self,
        kind: EntityKind,
        position: Vec3,
    ) -> Result<EntityId, SimulationError> {
        if !kind.is_enemy() {
            log::warn!("refusing to spawn {kind:?} as an enemy");
            return Err(SimulationError::NotAnEnemy(kind));
        }

        let tuning = &self.config.enemy;
        let to_player = self.player.position_2d() - utils::xy(&position);
        let facing = utils::direction_to_angle(to_player);

        let (speed, drag, velocity) = match kind {
            EntityKind::Seeker => (tuning.seeker_speed, tuning.drag, Vec3::zeros()),
            EntityKind::Wanderer => (tuning.wanderer_speed, tuning.drag, Vec3::zeros()),
            _ => {
                // bouncers launch 45 degrees off the line to the player
                let launch = utils::angle_to_direction(facing + 45.0) * tuning.bouncer_speed;
                (tuning.bouncer_speed, 1.0, Vec3::new(launch.x, launch.y, 0.0))
            }
        };

        let enemy = Entity::builder(kind)
            .position(position)
            .velocity(velocity)
            .half_extent(tuning.half_extent)
            .speed(speed)
            .drag(drag)
            .angle(facing)
            .sprite(SpriteHandle(tuning.sprite))
            .build()?;
        self.insert_enemy(enemy)
    }

    /// Add a fully built enemy
    ///
    /// # Errors
    ///
    /// `NotAnEnemy` for non-enemy kinds. `Physics` when the collider is
    /// degenerate or its shape cannot be tested against the rectangles it
    /// meets under the configured mixed-pair policy.
    pub fn insert_enemy(&mut self, enemy: Entity) -> Result<EntityId, SimulationError> {
        if !enemy.kind.is_enemy() {
            log::warn!("refusing to insert {:?} as an enemy", enemy.kind);
            return Err(SimulationError::NotAnEnemy(enemy.kind));
        }
        // player, walls and bullets are all rectangles
        test_collision_with(&enemy, &self.player, self.config.collision.mixed_pairs)?;

        let kind = enemy.kind;
        let id = self.enemies.insert(enemy);
        log::debug!("spawned {kind:?} {id:?}");
        Ok(id)
    }

    /// Advance the game by `dt` seconds
    ///
    /// A `dt` of zero or less is a paused frame and does nothing.
    ///
    /// # Errors
    ///
    /// Degenerate geometry or a rejected shape pair is reported before anything
    /// moves, so a failed step leaves the state untouched.
    pub fn step(&mut self, input: &TickInput, dt: f64) -> Result<(), SimulationError> {
        if !dt.is_finite() {
            log::warn!("ignoring step with non-finite dt {dt}");
            return Ok(());
        }
        if dt <= 0.0 {
            return Ok(());
        }
        self.check_colliders()?;
        self.clock.advance(dt);

        self.apply_input(input);
        if input.fire && !self.fire_held {
            self.fire_bullet()?;
        }
        self.fire_held = input.fire;

        self.run_behaviors(dt);

        integrate(&mut self.player, dt);
        integrate_all(&mut self.enemies, dt);
        integrate_all(&mut self.bullets, dt);

        self.enforce_arena();
        self.collide_player_with_walls()?;
        self.collide_enemies_with_walls()?;
        self.collide_player_with_enemies()?;
        self.collide_enemies_with_bullets()?;

        let removed = self.enemies.remove_dead() + self.bullets.remove_dead();
        if removed > 0 {
            log::debug!("removed {removed} dead entities");
        }
        Ok(())
    }

    fn check_colliders(&self) -> Result<(), SimulationError> {
        let policy = self.config.collision.mixed_pairs;
        for wall in &self.walls {
            test_collision_with(&self.player, wall, policy)?;
        }
        for (_, enemy) in self.enemies.iter().filter(|(_, enemy)| enemy.alive) {
            test_collision_with(enemy, &self.player, policy)?;
        }
        for (_, bullet) in &self.bullets {
            world_collider(bullet)?;
        }
        Ok(())
    }

    fn apply_input(&mut self, input: &TickInput) {
        let thrust = input.acceleration;
        if thrust.x.is_finite() && thrust.y.is_finite() {
            let thrust = if thrust.norm_squared() > 1.0 {
                thrust.normalize()
            } else {
                thrust
            };
            let speed = self.player.speed;
            self.player.add_acceleration(thrust * speed);
        } else {
            log::warn!("rejected non-finite input acceleration {thrust:?}");
        }

        match input.aim_angle {
            Some(angle) if angle.is_finite() => self.player.set_angle(angle),
            Some(angle) => log::warn!("rejected non-finite aim angle {angle}"),
            None => {}
        }
    }

    fn fire_bullet(&mut self) -> Result<EntityId, SimulationError> {
        let heading = self.player.heading();
        let muzzle = self.player.position_2d() + heading * self.player.scale.x;
        let launch = heading * self.config.bullet.speed;

        let bullet = Entity::builder(EntityKind::Bullet)
            .position(Vec3::new(muzzle.x, muzzle.y, self.player.position.z))
            .velocity(Vec3::new(launch.x, launch.y, 0.0))
            .half_extent(self.config.bullet.half_extent)
            .angle(self.player.angle)
            .speed(self.config.bullet.speed)
            .sprite(SpriteHandle(self.config.bullet.sprite))
            .build()?;

        let id = self.bullets.insert(bullet);
        log::debug!("fired bullet {id:?} heading {:.1}°", self.player.angle);
        Ok(id)
    }

    fn run_behaviors(&mut self, dt: f64) {
        let ctx = BehaviorContext {
            player_position: self.player.position_2d(),
            elapsed: self.clock.elapsed(),
            dt,
            arena: &self.config.arena,
        };
        let tuning = &self.config.enemy;

        for registry in [&mut self.enemies, &mut self.bullets] {
            registry.for_each_mut(|id, entity| {
                if entity.alive {
                    Behavior::for_kind_tuned(entity.kind, tuning).apply(id, entity, &ctx);
                }
            });
        }
    }

    fn enforce_arena(&mut self) {
        let arena = &self.config.arena;
        let position = &mut self.player.position;
        position.x = utils::clamp(position.x, -arena.half_width, arena.half_width);
        position.y = utils::clamp(position.y, -arena.half_height, arena.half_height);

        self.bullets.for_each_mut(|id, bullet| {
            if bullet.alive && !arena.contains(bullet.position.x, bullet.position.y) {
                bullet.kill();
                log::trace!("bullet {id:?} left the arena");
            }
        });
    }

    fn collide_player_with_walls(&mut self) -> Result<(), SimulationError> {
        let policy = self.config.collision.mixed_pairs;
        for wall in &self.walls {
            if let Some(contact) = test_collision_with(&self.player, wall, policy)? {
                resolve(&mut self.player, &contact);
            }
        }
        Ok(())
    }

    fn collide_enemies_with_walls(&mut self) -> Result<(), SimulationError> {
        let policy = self.config.collision.mixed_pairs;
        let mut cursor = self.enemies.first();
        while let Some(id) = cursor {
            cursor = self.enemies.next_of(id);
            let Some(enemy) = self.enemies.get_mut(id) else {
                continue;
            };
            if !enemy.alive {
                continue;
            }
            for wall in &self.walls {
                if !CollisionLayers::should_collide(enemy.kind, wall.kind) {
                    continue;
                }
                if let Some(contact) = test_collision_with(enemy, wall, policy)? {
                    resolve(enemy, &contact);
                }
            }
        }
        Ok(())
    }

    fn collide_player_with_enemies(&mut self) -> Result<(), SimulationError> {
        let policy = self.config.collision.mixed_pairs;
        let mut cursor = self.enemies.first();
        while let Some(id) = cursor {
            cursor = self.enemies.next_of(id);
            let Some(enemy) = self.enemies.get_mut(id) else {
                continue;
            };
            if !enemy.alive || !CollisionLayers::should_collide(self.player.kind, enemy.kind) {
                continue;
            }
            if test_collision_with(&self.player, enemy, policy)?.is_some() {
                enemy.kill();
                self.events.push(GameEvent::PlayerHit {
                    enemy: id,
                    kind: enemy.kind,
                });
            }
        }
        Ok(())
    }

    fn collide_enemies_with_bullets(&mut self) -> Result<(), SimulationError> {
        let policy = self.config.collision.mixed_pairs;
        let pairs = self.broad_phase.candidate_pairs(&self.enemies, &self.bullets);

        for (enemy_id, bullet_id) in pairs {
            let enemy = self.enemies.get(enemy_id);
            let bullet = self.bullets.get(bullet_id);
            let (Some(enemy), Some(bullet)) = (enemy, bullet) else {
                continue;
            };
            // one bullet kills one enemy
            if !enemy.alive || !bullet.alive {
                continue;
            }
            if !CollisionLayers::should_collide(enemy.kind, bullet.kind) {
                continue;
            }
            if test_collision_with(enemy, bullet, policy)?.is_none() {
                continue;
            }

            let kind = enemy.kind;
            self.enemies.despawn(enemy_id);
            self.bullets.despawn(bullet_id);
            self.events.push(GameEvent::EnemyKilled {
                enemy: enemy_id,
                bullet: bullet_id,
                kind,
            });
        }
        Ok(())
    }

    /// Take the events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain().collect()
    }

    /// Pending event queue
    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Render data for every live entity, back to front
    pub fn snapshot(&self) -> Vec<RenderSnapshot> {
        let capacity = self.walls.len() + self.enemies.len() + self.bullets.len() + 1;
        let mut snapshots = Vec::with_capacity(capacity);
        self.render(&mut snapshots);
        snapshots
    }

    /// Feed every live entity to a sink: walls, enemies, bullets, then the player
    pub fn render(&self, sink: &mut impl RenderSink) {
        let live = |entity: &&Entity| entity.alive;
        self.walls
            .iter()
            .chain(self.enemies.iter().map(|(_, e)| e))
            .chain(self.bullets.iter().map(|(_, e)| e))
            .chain(std::iter::once(&self.player))
            .filter(live)
            .for_each(|entity| sink.draw(&RenderSnapshot::from(entity)));
    }

    /// The player ship
    pub fn player(&self) -> &Entity {
        &self.player
    }

    /// Mutable access to the player, for teleports and scripted setups
    pub fn player_mut(&mut self) -> &mut Entity {
        &mut self.player
    }

    /// Arena walls
    pub fn walls(&self) -> &[Entity] {
        &self.walls
    }

    /// Live enemies
    pub fn enemies(&self) -> &EntityRegistry {
        &self.enemies
    }

    /// Mutable enemy registry
    pub fn enemies_mut(&mut self) -> &mut EntityRegistry {
        &mut self.enemies
    }

    /// Bullets in flight
    pub fn bullets(&self) -> &EntityRegistry {
        &self.bullets
    }

    /// Seconds simulated so far
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Number of steps taken
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Active configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}

/// Four static walls just outside the arena bounds
fn build_walls(config: &SimulationConfig) -> Result<Vec<Entity>, PhysicsError> {
    let arena = &config.arena;
    let t = arena.wall_half_thickness;
    let (hw, hh) = (arena.half_width, arena.half_height);

    let specs = [
        (Vec2::new(-(hw + t), 0.0), Vec2::new(t, hh + 2.0 * t)),
        (Vec2::new(hw + t, 0.0), Vec2::new(t, hh + 2.0 * t)),
        (Vec2::new(0.0, -(hh + t)), Vec2::new(hw + 2.0 * t, t)),
        (Vec2::new(0.0, hh + t), Vec2::new(hw + 2.0 * t, t)),
    ];

    specs
        .into_iter()
        .map(|(center, half_extents)| {
            Entity::builder(EntityKind::Wall)
                .position(Vec3::new(center.x, center.y, 0.0))
                .half_extents(half_extents)
                .build()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ColliderShape;
    use crate::physics::MixedPairPolicy;
    use crate::spatial::UniformGrid;
    use approx::assert_relative_eq;

    const DT: f64 = 1.0 / 60.0;

    fn state() -> SimulationState {
        SimulationState::new(SimulationConfig::default()).unwrap()
    }

    fn still_enemy(kind: EntityKind, x: f32, y: f32) -> Entity {
        Entity::builder(kind)
            .position(Vec3::new(x, y, 0.0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_builds_walls_outside_arena() {
        let state = state();
        assert_eq!(state.walls().len(), 4);
        assert!(state.enemies().is_empty());
        assert!(state.bullets().is_empty());

        let arena = &state.config().arena;
        for wall in state.walls() {
            assert!(!arena.contains(wall.position.x, wall.position.y));
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = SimulationConfig::default();
        config.player.drag = 0.0;
        assert!(matches!(SimulationState::new(config), Err(SimulationError::Config(_))));
    }

    #[test]
    fn test_fire_spawns_on_press_edge_only() {
        let mut state = state();
        let fire = TickInput {
            fire: true,
            ..TickInput::default()
        };

        state.step(&fire, DT).unwrap();
        state.step(&fire, DT).unwrap();
        assert_eq!(state.bullets().len(), 1);

        state.step(&TickInput::default(), DT).unwrap();
        state.step(&fire, DT).unwrap();
        assert_eq!(state.bullets().len(), 2);
    }

    #[test]
    fn test_bullet_travels_along_aim() {
        let mut state = state();
        let input = TickInput {
            aim_angle: Some(0.0),
            fire: true,
            ..TickInput::default()
        };
        state.step(&input, DT).unwrap();

        let (_, bullet) = state.bullets().iter().next().unwrap();
        assert!(bullet.velocity.x > 0.0);
        assert_relative_eq!(bullet.velocity.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(bullet.angle, 0.0);
    }

    #[test]
    fn test_player_clamped_and_pushed_off_walls() {
        let mut state = state();
        state.player_mut().position = Vec3::new(100.0, -100.0, 0.0);
        state.step(&TickInput::default(), DT).unwrap();

        let arena = state.config().arena.clone();
        let player = state.player();
        assert!(player.position.x <= arena.half_width - player.scale.x + 1e-4);
        assert!(player.position.y >= -arena.half_height + player.scale.y - 1e-4);
    }

    #[test]
    fn test_bullets_leaving_arena_are_removed() {
        let mut state = state();
        state.player_mut().position = Vec3::new(state.config().arena.half_width - 1.0, 0.0, 0.0);
        let input = TickInput {
            aim_angle: Some(0.0),
            fire: true,
            ..TickInput::default()
        };
        state.step(&input, DT).unwrap();
        for _ in 0..30 {
            state.step(&TickInput::default(), DT).unwrap();
        }
        assert!(state.bullets().is_empty());
    }

    #[test]
    fn test_enemy_touching_player_is_consumed() {
        let mut state = state();
        let id = state.insert_enemy(still_enemy(EntityKind::Wanderer, 1.5, 0.0)).unwrap();
        state.step(&TickInput::default(), DT).unwrap();

        assert!(!state.enemies().contains(id));
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::PlayerHit {
                enemy: id,
                kind: EntityKind::Wanderer
            }]
        );
        assert_eq!(state.player().position_2d(), Vec2::zeros());
    }

    #[test]
    fn test_bullet_kills_enemy_once() {
        let mut state = state();
        let near = state.insert_enemy(still_enemy(EntityKind::Seeker, 0.0, 3.0)).unwrap();
        let behind = state.insert_enemy(still_enemy(EntityKind::Seeker, 0.0, 3.5)).unwrap();

        let fire = TickInput {
            aim_angle: Some(90.0),
            fire: true,
            ..TickInput::default()
        };
        state.step(&fire, DT).unwrap();
        for _ in 0..5 {
            state.step(&TickInput::default(), DT).unwrap();
        }

        let kills: Vec<_> = state
            .drain_events()
            .into_iter()
            .filter(|event| matches!(event, GameEvent::EnemyKilled { .. }))
            .collect();
        assert_eq!(kills.len(), 1);
        assert!(matches!(kills[0], GameEvent::EnemyKilled { enemy, .. } if enemy == near));
        assert!(state.enemies().contains(behind));
        assert!(state.bullets().is_empty());
    }

    #[test]
    fn test_enemy_pushed_back_by_wall() {
        let mut state = state();
        let edge = state.config().arena.half_width;
        let id = state.insert_enemy(still_enemy(EntityKind::Wanderer, edge + 0.5, 10.0)).unwrap();
        state.step(&TickInput::default(), DT).unwrap();

        let enemy = state.enemies().get(id).unwrap();
        assert!(enemy.position.x <= edge - enemy.scale.x + 0.1);
    }

    #[test]
    fn test_circle_enemy_needs_bounding_circle_policy() {
        let mut round = still_enemy(EntityKind::Seeker, 20.0, 0.0);
        round.collider_shape = ColliderShape::Circle;

        let mut strict = state();
        assert!(matches!(
            strict.insert_enemy(round.clone()),
            Err(SimulationError::Physics(PhysicsError::UnsupportedColliderPair { .. }))
        ));
        assert!(strict.enemies().is_empty());

        let mut config = SimulationConfig::default();
        config.collision.mixed_pairs = MixedPairPolicy::BoundingCircle;
        let mut lenient = SimulationState::new(config).unwrap();
        lenient.insert_enemy(round).unwrap();
        lenient.step(&TickInput::default(), DT).unwrap();
        assert_eq!(lenient.enemies().len(), 1);
    }

    #[test]
    fn test_insert_enemy_rejects_non_enemy() {
        let mut state = state();
        let pickup = still_enemy(EntityKind::Pickup, 0.5, 0.0);
        assert!(matches!(
            state.insert_enemy(pickup),
            Err(SimulationError::NotAnEnemy(EntityKind::Pickup))
        ));

        state.step(&TickInput::default(), DT).unwrap();
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_failed_step_changes_nothing() {
        let mut state = state();
        let id = state.insert_enemy(still_enemy(EntityKind::Seeker, 20.0, 0.0)).unwrap();
        if let Some(enemy) = state.enemies_mut().get_mut(id) {
            enemy.scale.x = 0.0;
        }

        let input = TickInput {
            acceleration: Vec2::new(1.0, 0.0),
            aim_angle: Some(0.0),
            fire: true,
        };
        for _ in 0..5 {
            assert!(matches!(
                state.step(&input, DT),
                Err(SimulationError::Physics(PhysicsError::DegenerateCollider { .. }))
            ));
        }

        assert_eq!(state.player().position, Vec3::zeros());
        assert_eq!(state.player().velocity, Vec3::zeros());
        assert_eq!(state.player().acceleration, Vec3::zeros());
        assert!(state.bullets().is_empty());
        assert_eq!(state.frame_count(), 0);

        state.enemies_mut().despawn(id);
        state.step(&input, DT).unwrap();
        assert_eq!(state.bullets().len(), 1);
    }

    #[test]
    fn test_spawn_enemy_rejects_non_enemy() {
        let mut state = state();
        assert!(matches!(
            state.spawn_enemy(EntityKind::Wall, Vec3::zeros()),
            Err(SimulationError::NotAnEnemy(EntityKind::Wall))
        ));
        assert!(state.spawn_enemy(EntityKind::Bouncer, Vec3::new(5.0, 5.0, 0.0)).is_ok());
    }

    #[test]
    fn test_grid_broad_phase_gives_same_kills() {
        let run = |grid: bool| {
            let mut state = state();
            if grid {
                state.set_broad_phase(Box::new(UniformGrid::new(2.0)));
            }
            for x in [-6.0, -3.0, 3.0, 6.0] {
                state.insert_enemy(still_enemy(EntityKind::Seeker, x, 8.0)).unwrap();
            }
            for x in [3.0_f32, -3.0, 6.0, -6.0] {
                let input = TickInput {
                    aim_angle: Some(utils::direction_to_angle(Vec2::new(x, 8.0))),
                    fire: true,
                    ..TickInput::default()
                };
                state.step(&input, DT).unwrap();
                state.step(&TickInput::default(), DT).unwrap();
            }
            for _ in 0..60 {
                state.step(&TickInput::default(), DT).unwrap();
            }

            let mut killed: Vec<_> = state
                .drain_events()
                .into_iter()
                .filter_map(|event| match event {
                    GameEvent::EnemyKilled { enemy, .. } => Some(enemy),
                    GameEvent::PlayerHit { .. } => None,
                })
                .collect();
            killed.sort();
            killed
        };

        let brute = run(false);
        assert_eq!(brute.len(), 4);
        assert_eq!(run(true), brute);
    }

    #[test]
    fn test_snapshot_draws_player_last() {
        let mut state = state();
        state.insert_enemy(still_enemy(EntityKind::Seeker, 10.0, 10.0)).unwrap();
        let snapshots = state.snapshot();

        assert_eq!(snapshots.len(), 4 + 1 + 1);
        assert_eq!(snapshots.last().map(|s| s.kind), Some(EntityKind::Player));
        assert_eq!(snapshots.iter().filter(|s| s.kind == EntityKind::Wall).count(), 4);
    }

    #[test]
    fn test_paused_frames_do_not_accumulate() {
        let push = TickInput {
            acceleration: Vec2::new(1.0, 0.0),
            fire: true,
            ..TickInput::default()
        };

        let mut paused = state();
        for _ in 0..10 {
            paused.step(&push, 0.0).unwrap();
        }
        assert_eq!(paused.frame_count(), 0);
        assert!(paused.bullets().is_empty());
        assert_eq!(paused.player().acceleration, Vec3::zeros());
        paused.step(&push, DT).unwrap();

        let mut single = state();
        single.step(&push, DT).unwrap();

        assert_relative_eq!(paused.player().velocity, single.player().velocity);
        assert_relative_eq!(paused.player().position, single.player().position);
        assert_eq!(paused.bullets().len(), 1);
    }

    #[test]
    fn test_non_finite_dt_is_ignored() {
        let mut state = state();
        state.step(&TickInput::default(), f64::NAN).unwrap();
        assert_eq!(state.frame_count(), 0);
        assert!(state.player().position.iter().all(|c| c.is_finite()));
    }
}
