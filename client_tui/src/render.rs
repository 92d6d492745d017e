//! Scales the 800x600 arena onto the terminal cell grid and draws the
//! frame snapshot: birds, platforms, lava, scores and the message layer.

use std::io::{stdout, Stdout, Write};

use anyhow::Result;
use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use game_core::{
    BirdView, CountdownPhase, FrameSnapshot, MatchPhase, Params, Rect, Side,
};

const LEFT_COLOR: Color = Color::Red;
const RIGHT_COLOR: Color = Color::Green;
const PLATFORM_COLOR: Color = Color::White;
const LAVA_COLOR: Color = Color::DarkRed;
const MESSAGE_COLOR: Color = Color::Blue;

/// Raw-mode alternate-screen terminal. `restore` must run before the
/// process exits, whatever happened.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn new() -> Result<Self> {
        let mut out = stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self { out })
    }

    pub fn restore(&mut self) -> Result<()> {
        execute!(self.out, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn draw(&mut self, snapshot: &FrameSnapshot) -> Result<()> {
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        let mut canvas = Canvas::new(cols, rows);
        compose(&mut canvas, snapshot);
        self.blit(&canvas)
    }

    fn blit(&mut self, canvas: &Canvas) -> Result<()> {
        let mut current = None;
        for row in 0..canvas.rows {
            queue!(self.out, cursor::MoveTo(0, row))?;
            for col in 0..canvas.cols {
                let (ch, color) = canvas.get(col, row);
                if current != Some(color) {
                    queue!(self.out, SetForegroundColor(color))?;
                    current = Some(color);
                }
                queue!(self.out, Print(ch))?;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Off-screen cell buffer in terminal coordinates.
struct Canvas {
    cols: u16,
    rows: u16,
    cells: Vec<(char, Color)>,
}

impl Canvas {
    fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![(' ', Color::Reset); cols as usize * rows as usize],
        }
    }

    fn get(&self, col: u16, row: u16) -> (char, Color) {
        self.cells[row as usize * self.cols as usize + col as usize]
    }

    fn put(&mut self, col: u16, row: u16, ch: char, color: Color) {
        if col < self.cols && row < self.rows {
            self.cells[row as usize * self.cols as usize + col as usize] = (ch, color);
        }
    }

    /// Arena x to terminal column.
    fn col(&self, x: f32) -> i32 {
        (x / Params::ARENA_WIDTH * self.cols as f32) as i32
    }

    /// Arena y to terminal row.
    fn row(&self, y: f32) -> i32 {
        (y / Params::ARENA_HEIGHT * self.rows as f32) as i32
    }

    /// Fill an arena-space rectangle. Always covers at least one cell so
    /// thin platforms stay visible on small terminals.
    fn fill_rect(&mut self, rect: &Rect, ch: char, color: Color) {
        let col_start = self.col(rect.min.x).max(0);
        let col_end = self.col(rect.max.x).max(col_start + 1);
        let row_start = self.row(rect.min.y).max(0);
        let row_end = self.row(rect.max.y).max(row_start + 1);
        for row in row_start..row_end {
            for col in col_start..col_end {
                self.put(col as u16, row as u16, ch, color);
            }
        }
    }

    fn text(&mut self, col: i32, row: i32, text: &str, color: Color) {
        for (i, ch) in text.chars().enumerate() {
            let col = col + i as i32;
            if col >= 0 && row >= 0 {
                self.put(col as u16, row as u16, ch, color);
            }
        }
    }

    fn centered(&mut self, row: i32, text: &str, color: Color) {
        let col = (self.cols as i32 - text.len() as i32) / 2;
        self.text(col, row, text, color);
    }
}

fn compose(canvas: &mut Canvas, snapshot: &FrameSnapshot) {
    if snapshot.background_enabled {
        backdrop(canvas);
    }
    if snapshot.lava_enabled {
        let lava = Rect::from_top_left(0.0, 540.0, Params::ARENA_WIDTH, 60.0);
        canvas.fill_rect(&lava, '~', LAVA_COLOR);
    }
    for rect in &snapshot.platforms {
        canvas.fill_rect(rect, '=', PLATFORM_COLOR);
    }
    for bird in &snapshot.birds {
        draw_bird(canvas, bird);
    }
    messages(canvas, snapshot);
}

/// The "cool background": a sparse starfield, purely cosmetic.
fn backdrop(canvas: &mut Canvas) {
    for row in 0..canvas.rows {
        for col in 0..canvas.cols {
            if (col as usize * 7 + row as usize * 13) % 31 == 0 {
                canvas.put(col, row, '.', Color::DarkBlue);
            }
        }
    }
}

fn draw_bird(canvas: &mut Canvas, bird: &BirdView) {
    let rect = Rect::from_center_size(bird.pos, bird.size);
    let ch = if bird.facing.is_left() { '<' } else { '>' };
    let color = match bird.side {
        Side::Left => LEFT_COLOR,
        Side::Right => RIGHT_COLOR,
    };
    canvas.fill_rect(&rect, ch, color);
}

fn messages(canvas: &mut Canvas, snapshot: &FrameSnapshot) {
    let mid = canvas.rows as i32 / 2;
    match snapshot.phase {
        MatchPhase::NotStarted => {
            let lines = [
                "1. Toggle options: 1 lava, 2 background, 3 moving platforms",
                "2. Press Enter to start",
                "3. Press Enter again to pause/unpause",
                "4. First to 10 wins",
                "Left bird: A/S   Right bird: K/L   Quit: Q",
            ];
            for (i, line) in lines.iter().enumerate() {
                canvas.centered(mid - 2 + i as i32, line, MESSAGE_COLOR);
            }
        }
        MatchPhase::Countdown(CountdownPhase::Ready) => {
            canvas.centered(mid, "READY.", MESSAGE_COLOR)
        }
        MatchPhase::Countdown(CountdownPhase::Set) => canvas.centered(mid, "SET.", MESSAGE_COLOR),
        MatchPhase::Countdown(_) => canvas.centered(mid, "GO!", MESSAGE_COLOR),
        MatchPhase::Paused => canvas.centered(mid, "PAUSED", MESSAGE_COLOR),
        MatchPhase::Playing => {
            scores(canvas, snapshot);
            if snapshot.left_scored {
                canvas.text(2, mid, "RED SCORED!", LEFT_COLOR);
            }
            if snapshot.right_scored {
                let col = canvas.cols as i32 - 16;
                canvas.text(col, mid, "GREEN SCORED!", RIGHT_COLOR);
            }
        }
        MatchPhase::GameOver(winner) => {
            scores(canvas, snapshot);
            let (banner, color) = match winner {
                Side::Left => ("RED WINS!!!", LEFT_COLOR),
                Side::Right => ("GREEN WINS!!!", RIGHT_COLOR),
            };
            canvas.centered(mid, banner, color);
        }
    }
}

fn scores(canvas: &mut Canvas, snapshot: &FrameSnapshot) {
    canvas.text(2, 0, &snapshot.score.left.to_string(), LEFT_COLOR);
    let right = snapshot.score.right.to_string();
    let col = canvas.cols as i32 - right.len() as i32 - 2;
    canvas.text(col, 0, &right, RIGHT_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Config, Match};

    fn canvas() -> Canvas {
        Canvas::new(80, 24)
    }

    #[test]
    fn test_arena_scaling() {
        let canvas = canvas();
        assert_eq!(canvas.col(0.0), 0);
        assert_eq!(canvas.col(800.0), 80);
        assert_eq!(canvas.col(400.0), 40);
        assert_eq!(canvas.row(600.0), 24);
        assert_eq!(canvas.row(150.0), 6);
    }

    #[test]
    fn test_thin_rects_still_cover_a_cell() {
        let mut canvas = canvas();
        // 20 units tall: less than one 25-unit row.
        let platform = Rect::from_top_left(0.0, 200.0, 300.0, 20.0);
        canvas.fill_rect(&platform, '=', PLATFORM_COLOR);

        assert_eq!(canvas.get(0, 8), ('=', PLATFORM_COLOR));
        assert_eq!(canvas.get(29, 8), ('=', PLATFORM_COLOR));
        assert_eq!(canvas.get(30, 8).0, ' ');
    }

    #[test]
    fn test_out_of_bounds_put_is_ignored() {
        let mut canvas = canvas();
        canvas.put(200, 50, 'x', Color::Reset);
        // First three chars land off-screen, the rest shift in.
        canvas.text(-3, 0, "hello", Color::Reset);
        assert_eq!(canvas.get(0, 0), ('l', Color::Reset));
    }

    #[test]
    fn test_compose_draws_a_full_frame() {
        let game = Match::new(Config::new());
        let mut canvas = canvas();
        compose(&mut canvas, &game.snapshot());

        // Instructions are showing before the match starts.
        let row: String = (0..canvas.cols)
            .map(|col| canvas.get(col, 11).0)
            .collect();
        assert!(row.contains("Press Enter to start"));
    }
}
