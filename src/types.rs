/// Axis-aligned rectangle in integer screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];
}

/// Events produced by the input layer once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Move(Direction),
    Fire,
}

/// Sound effects the core can ask the audio layer to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    Hit,
}

/// Summary of what happened during one update step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub expired: usize, // Bullets that left the play-field
    pub spawned: usize, // Enemies created by the spawner
    pub hits: u32,      // Enemies destroyed by bullets
}
