//! Full-tick scenarios through the public API

use shooter_core::config::{BroadPhaseKind, Config};
use shooter_core::prelude::*;

const DT: f64 = 1.0 / 60.0;

fn run_scripted(config: SimulationConfig, ticks: usize) -> (Vec<GameEvent>, Vec<RenderSnapshot>) {
    let mut state = SimulationState::new(config).unwrap();
    state.spawn_enemy(EntityKind::Seeker, Vec3::new(20.0, 10.0, 0.0)).unwrap();
    state.spawn_enemy(EntityKind::Wanderer, Vec3::new(-15.0, 5.0, 0.0)).unwrap();
    state.spawn_enemy(EntityKind::Bouncer, Vec3::new(0.0, -15.0, 0.0)).unwrap();

    let mut events = Vec::new();
    for tick in 0..ticks {
        let input = TickInput {
            acceleration: Vec2::new((tick as f32 * 0.05).cos(), 0.0),
            aim_angle: Some((tick * 7 % 360) as f32),
            fire: tick % 6 < 3,
        };
        state.step(&input, DT).unwrap();
        events.extend(state.drain_events());
    }
    (events, state.snapshot())
}

#[test]
fn replay_is_deterministic() {
    let (events_a, frame_a) = run_scripted(SimulationConfig::default(), 600);
    let (events_b, frame_b) = run_scripted(SimulationConfig::default(), 600);

    assert_eq!(events_a, events_b);
    assert_eq!(frame_a, frame_b);
}

#[test]
fn grid_and_brute_force_agree_over_a_session() {
    let mut grid = SimulationConfig::default();
    grid.collision.broad_phase = BroadPhaseKind::UniformGrid;

    let (brute_events, brute_frame) = run_scripted(SimulationConfig::default(), 600);
    let (grid_events, grid_frame) = run_scripted(grid, 600);

    let kills = |events: &[GameEvent]| {
        let mut enemies: Vec<_> = events
            .iter()
            .map(|event| match *event {
                GameEvent::EnemyKilled { enemy, .. } | GameEvent::PlayerHit { enemy, .. } => enemy,
            })
            .collect();
        enemies.sort();
        enemies
    };
    assert_eq!(kills(&brute_events), kills(&grid_events));
    assert_eq!(brute_frame.len(), grid_frame.len());
}

#[test]
fn everything_stays_inside_the_walls() {
    let mut state = SimulationState::new(SimulationConfig::default()).unwrap();
    for i in 0..8 {
        let x = -30.0 + i as f32 * 8.0;
        state.spawn_enemy(EntityKind::Bouncer, Vec3::new(x, 15.0, 0.0)).unwrap();
    }

    let arena = state.config().arena.clone();
    for _ in 0..1200 {
        state.step(&TickInput::default(), DT).unwrap();
        for (_, enemy) in state.enemies() {
            assert!(enemy.position.x.abs() <= arena.half_width + 0.5, "{enemy:?}");
            assert!(enemy.position.y.abs() <= arena.half_height + 0.5, "{enemy:?}");
        }
    }
}

#[test]
fn seekers_reach_the_player() {
    let mut state = SimulationState::new(SimulationConfig::default()).unwrap();
    let id = state.spawn_enemy(EntityKind::Seeker, Vec3::new(12.0, 0.0, 0.0)).unwrap();

    let mut hit = false;
    for _ in 0..600 {
        state.step(&TickInput::default(), DT).unwrap();
        hit |= state
            .drain_events()
            .iter()
            .any(|event| *event == GameEvent::PlayerHit { enemy: id, kind: EntityKind::Seeker });
        if hit {
            break;
        }
    }
    assert!(hit);
    assert!(state.enemies().is_empty());
}

#[test]
fn render_sink_receives_every_live_entity() {
    struct Recorder(Vec<EntityKind>);
    impl RenderSink for Recorder {
        fn draw(&mut self, snapshot: &RenderSnapshot) {
            self.0.push(snapshot.kind);
        }
    }

    let mut state = SimulationState::new(SimulationConfig::default()).unwrap();
    state.spawn_enemy(EntityKind::Wanderer, Vec3::new(10.0, 10.0, 0.0)).unwrap();
    state
        .step(&TickInput { fire: true, ..TickInput::default() }, DT)
        .unwrap();

    let mut recorder = Recorder(Vec::new());
    state.render(&mut recorder);
    assert_eq!(
        recorder.0,
        vec![
            EntityKind::Wall,
            EntityKind::Wall,
            EntityKind::Wall,
            EntityKind::Wall,
            EntityKind::Wanderer,
            EntityKind::Bullet,
            EntityKind::Player,
        ]
    );
}

#[test]
fn config_file_drives_the_simulation() {
    let path = std::env::temp_dir().join(format!("shooter_core_it_{}.toml", std::process::id()));
    let path = path.to_str().unwrap().to_string();
    std::fs::write(&path, "[arena]\nhalf_width = 12.0\nhalf_height = 8.0\n").unwrap();

    let config = SimulationConfig::load_from_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let mut state = SimulationState::new(config).unwrap();
    state.player_mut().position = Vec3::new(30.0, 0.0, 0.0);
    state.step(&TickInput::default(), DT).unwrap();
    assert!(state.player().position.x <= 12.0);
}
