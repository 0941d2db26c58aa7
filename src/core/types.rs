/// Common type definitions shared by the scheduler, the sky and the platform layer.

/// Unlock state of a chapter node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeState {
    Locked,
    Unlocked,
}

impl NodeState {
    pub fn is_unlocked(self) -> bool {
        self == NodeState::Unlocked
    }
}

/// A chapter access point on the path
#[derive(Debug, Clone)]
pub struct ChapterNode {
    pub index: usize,
    pub state: NodeState,
    pub link: String,

    // Rendering state
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub hover: f64,
}

impl ChapterNode {
    pub fn new(index: usize, link: String) -> Self {
        Self {
            index,
            state: NodeState::Locked,
            link,
            x: 0.0,
            y: 0.0,
            radius: super::config::NODE_RADIUS,
            hover: 0.0,
        }
    }

    /// Label shown on the node (1-based).
    pub fn label(&self) -> String {
        (self.index + 1).to_string()
    }
}

/// 2D coordinate vector
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn from_hex(hex: u32, alpha: f64) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f64 / 255.0,
            g: ((hex >> 8) & 0xFF) as f64 / 255.0,
            b: (hex & 0xFF) as f64 / 255.0,
            a: alpha,
        }
    }
}

/// Mouse event data
#[derive(Debug, Clone, Default)]
pub struct MouseEvent {
    pub x: f64,
    pub y: f64,
    pub button: u8,
    pub pressed: bool,
    pub released: bool,
}

/// Key event data
#[derive(Debug, Clone, Default)]
pub struct KeyEvent {
    pub keycode: u32,
    pub pressed: bool,
    pub ctrl: bool,
}

/// X11 keycodes the page reacts to.
pub mod keycode {
    pub const ESCAPE: u32 = 9;
    pub const RETURN: u32 = 36;
    pub const Q: u32 = 24;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        let c = Color::from_hex(0xFF8000, 0.5);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn test_node_label_is_one_based() {
        let node = ChapterNode::new(0, "chapters/chapter1.html".to_string());
        assert_eq!(node.label(), "1");
        assert_eq!(node.state, NodeState::Locked);
    }
}
