use crate::audio::{AudioManager, AudioSink};
use crate::config;
use crate::input::InputPoller;
use crate::movement::BoundaryPolicy;
use crate::render::Renderer;
use crate::score::ScoreLabel;
use crate::spawner::Spawner;
use crate::types::{FrameReport, InputEvent, SoundEffect};
use crate::world::World;
use log::{debug, info, warn};
use macroquad::prelude::next_frame;

/// The Game struct owns all loop state: entities, spawner, score label and quit flag
pub struct Game {
    pub world: World,
    spawner: Spawner,
    policy: BoundaryPolicy,
    label: ScoreLabel,
    frame: u64,
    quit: bool,
}

impl Game {
    pub fn new(spawner: Spawner, policy: BoundaryPolicy) -> Self {
        let world = World::new();
        let label = ScoreLabel::new(world.score);
        Game {
            world,
            spawner,
            policy,
            label,
            frame: 0,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn label(&self) -> &ScoreLabel {
        &self.label
    }

    /// Apply this frame's input: player moves, bullet spawns and the quit flag
    pub fn handle_input(&mut self, events: &[InputEvent]) {
        for event in events {
            match *event {
                InputEvent::Quit => {
                    info!("Quit requested on Frame {}", self.frame);
                    self.quit = true;
                }
                InputEvent::Move(direction) => self.world.move_player(direction, self.policy),
                InputEvent::Fire => {
                    let bullet = self.world.fire();
                    debug!("Frame {}: fired bullet at ({}, {})", self.frame, bullet.x, bullet.y);
                }
            }
        }
    }

    /// Advance the simulation by one frame
    pub fn update(&mut self) -> FrameReport {
        let expired = self.world.advance_bullets();
        let spawned = self.spawner.refill(&mut self.world.enemies);
        let hits = self.world.resolve_collisions();

        if self.label.sync(self.world.score) {
            info!("Frame {}: score is now {}", self.frame, self.world.score);
        }
        self.frame += 1;

        FrameReport {
            expired,
            spawned,
            hits,
        }
    }

    /// Ask the audio layer for one hit sound per hit. Failures are logged and ignored.
    pub fn dispatch_sounds(report: &FrameReport, audio: &mut dyn AudioSink) {
        for _ in 0..report.hits {
            if let Err(e) = audio.play(SoundEffect::Hit) {
                warn!("Failed to play sound effect: {}", e);
            }
        }
    }

    /// Run the main loop until the quit flag is set
    pub async fn run(&mut self, renderer: &Renderer, input: &mut InputPoller, audio: &mut AudioManager) {
        info!("Starting main loop...");
        if let Err(e) = audio.start_music() {
            warn!("Failed to play background music: {}", e);
        }

        while !self.quit {
            let events = input.poll();
            self.handle_input(&events);

            let report = self.update();
            Self::dispatch_sounds(&report, audio);

            renderer.draw_frame(&self.world, &self.label);
            next_frame().await;
        }

        audio.stop_music();
        info!(
            "Exiting after {} frames with a score of {}.",
            self.frame, self.world.score
        );
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(
            Spawner::new(config::REFILL_POLICY),
            config::BOUNDARY_POLICY,
        )
    }
}
