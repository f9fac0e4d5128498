use ggez;
use ggez::conf;
use ggez::event::{self, KeyCode, KeyMods};
use ggez::graphics::{self, Font};
use ggez::timer;
use ggez::{Context, ContextBuilder, GameError, GameResult};

use log::info;

use orbits::config::SimConfig;
use orbits::scenario;
use orbits::simulation::Simulation;
use orbits::surface::GgezSurface;
use orbits::ui::{Hud, UiWrapper};

struct Game {
    sim: Simulation,
    font: Font,
    // Kept apart from `sim` so both can be borrowed while drawing
    ui: UiWrapper,
}

impl Game {
    fn new(ctx: &mut Context, sim: Simulation) -> GameResult<Game> {
        let (draw_width, _) = graphics::drawable_size(ctx);
        let screen_coords = graphics::screen_coordinates(ctx);
        let hidpi_factor = draw_width / screen_coords.w;

        Ok(Game {
            sim,
            font: Font::default(),
            ui: UiWrapper::new(ctx, hidpi_factor)?,
        })
    }
}

impl event::EventHandler for Game {
    fn update(&mut self, ctx: &mut Context) -> GameResult<()> {
        let ticks = self.sim.config().ticks_per_frame as u64;
        match self.sim.config().target_fps {
            Some(fps) => {
                while timer::check_update_time(ctx, fps) {
                    self.sim.step_n(ticks);
                }
            }
            None => self.sim.step_n(ticks),
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult<()> {
        let hud = Hud::from_simulation(&self.sim);
        let mut surface = GgezSurface::new(ctx, self.font).with_overlay(&mut self.ui, hud);
        self.sim.draw_frame(&mut surface)
    }

    fn key_down_event(&mut self, ctx: &mut Context,
                      key: KeyCode, _mods: KeyMods, _: bool) {
        match key {
            KeyCode::Q | KeyCode::Escape => event::quit(ctx),
            _ => ()
        }
    }
}

fn game_err(e: GameError) -> anyhow::Error {
    anyhow::anyhow!("{}", e)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::default();
    let (w, h) = config.screen_size;
    let scenario = scenario::sun_and_planets();
    info!("starting scenario '{}'", scenario.name);
    let sim = scenario.build(config)?;

    let cb = ContextBuilder::new("orbits", "ggez")
        .window_setup(conf::WindowSetup::default().title("SIMULATION 1.0.0"))
        .window_mode(conf::WindowMode::default().dimensions(w, h));
    let (ctx, event_loop) = &mut cb.build().map_err(game_err)?;

    let game = &mut Game::new(ctx, sim).map_err(game_err)?;
    event::run(ctx, event_loop, game).map_err(game_err)?;

    info!("window closed");
    Ok(())
}
