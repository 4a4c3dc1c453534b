use std::io::stdout;
use std::time::{Duration, Instant};

use cheon_config::Config;
use cheon_core::{EaseSpeed, FieldTuning, GridConfig, Palette, Rgb, Vec2};
use cheon_field::{Scene, UNITS_PER_COL, UNITS_PER_ROW};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};

mod pointer;

use pointer::PointerTracker;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(&config).run(terminal);
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the effect.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Grid shape.
    grid: GridConfig,
    /// Displacement tuning.
    tuning: FieldTuning,
    /// Current palette preset.
    palette: Palette,
    /// Active gradient stops (config may override the preset's).
    stops: Vec<Rgb>,
    /// Whether the gradient overlay is drawn.
    overlay: bool,
    /// Pointer easing speed.
    speed: EaseSpeed,
    /// Smoothed pointer state.
    pointer: PointerTracker,
    /// Timestamp of the previous frame, for easing.
    last_frame: Instant,
}

impl App {
    /// Construct a new instance of [`App`] from loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            running: false,
            grid: config.grid(),
            tuning: config.tuning(),
            palette: config.palette(),
            stops: config.stops(),
            overlay: true,
            speed: config.speed(),
            pointer: PointerTracker::new(),
            last_frame: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        execute!(stdout(), EnableMouseCapture)?;
        self.running = true;
        self.last_frame = Instant::now();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the effect and the help line.
    fn render(&mut self, frame: &mut Frame) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.pointer.advance(dt, self.speed);

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Effect canvas
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        let scene = Scene {
            grid: &self.grid,
            tuning: &self.tuning,
            stops: &self.stops,
            pointer: self.pointer.position(),
            intensity: self.pointer.intensity(),
            overlay: self.overlay,
        };
        cheon_field::render(frame, chunks[0], &scene);

        let accent = self.stops.first().copied().unwrap_or_default().to_color();
        let help = Line::from(vec![
            "drag".bold().fg(accent),
            " pull the cloth  ".dark_gray(),
            "g".bold().fg(accent),
            " gradient  ".dark_gray(),
            "c".bold().fg(accent),
            format!(" palette ({})  ", self.palette.label()).dark_gray(),
            "s".bold().fg(accent),
            format!(" speed ({})  ", self.speed.label()).dark_gray(),
            "q".bold().fg(accent),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Uses polling with timeout so easing keeps animating between events.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        // Poll with ~33ms timeout for a steady animation rate
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('g')) => self.toggle_overlay(),
            (_, KeyCode::Char('c')) => self.cycle_palette(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            _ => {}
        }
    }

    /// Tracks press and drag as the active pointer; release clears it.
    /// Motion without a held button is ignored.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(_) | MouseEventKind::Drag(_) => {
                self.pointer.press(logical_position(mouse.column, mouse.row));
            }
            MouseEventKind::Up(_) => self.pointer.release(),
            _ => {}
        }
    }

    /// Toggle the gradient overlay pass.
    fn toggle_overlay(&mut self) {
        self.overlay = !self.overlay;
    }

    /// Cycle through the built-in palettes.
    fn cycle_palette(&mut self) {
        self.palette = self.palette.next();
        self.stops = self.palette.stops();
    }

    /// Cycle through the pointer easing speeds.
    fn cycle_speed(&mut self) {
        self.speed = self.speed.next();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

/// Center of a terminal cell in logical units.
fn logical_position(column: u16, row: u16) -> Vec2 {
    Vec2::new(
        (column as f32 + 0.5) * UNITS_PER_COL,
        (row as f32 + 0.5) * UNITS_PER_ROW,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_position_centers_in_the_cell() {
        assert_eq!(logical_position(0, 0), Vec2::new(5.0, 10.0));
        assert_eq!(logical_position(40, 12), Vec2::new(405.0, 250.0));
    }
}
