/// Chapter path: node states, layout, hit testing, opening and rendering.

use crate::core::animation::{lerp, smooth_towards, Animation};
use crate::core::config;
use crate::core::error::OpenError;
use crate::core::types::*;
use crate::platform::renderer::Renderer;
use crate::schedule::navigator::Navigator;
use crate::schedule::schedule_config::ScheduleConfig;

/// Result of a click on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The node is still locked; nothing was opened.
    Locked,
    /// The navigator was sent to this link.
    Navigated(String),
}

pub struct ChapterPath {
    nodes: Vec<ChapterNode>,
    hovered: Option<usize>,
    // One bloom per node, started when the node flips to unlocked
    blooms: Vec<Animation>,
    initialized: bool,
}

impl ChapterPath {
    pub fn new(schedule: &ScheduleConfig) -> Self {
        let nodes: Vec<ChapterNode> = schedule
            .chapter_links()
            .into_iter()
            .enumerate()
            .map(|(i, link)| ChapterNode::new(i, link))
            .collect();
        let n = nodes.len();
        Self {
            nodes,
            hovered: None,
            blooms: vec![Animation::finished(); n],
            initialized: false,
        }
    }

    pub fn nodes(&self) -> &[ChapterNode] {
        &self.nodes
    }

    pub fn unlocked_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.state.is_unlocked()).count()
    }

    /// Node `i` is unlocked iff `i < unlocked_count`.
    pub fn apply_node_states(&mut self, unlocked_count: usize) {
        let first_pass = !self.initialized;
        self.initialized = true;

        for (node, bloom) in self.nodes.iter_mut().zip(self.blooms.iter_mut()) {
            let state = if node.index < unlocked_count {
                NodeState::Unlocked
            } else {
                NodeState::Locked
            };
            if state != node.state {
                log::debug!("Chapter {} is now {:?}", node.index + 1, state);
                // Nodes already open at startup don't bloom
                if state.is_unlocked() && !first_pass {
                    bloom.start(config::UNLOCK_BLOOM_MS);
                }
            }
            node.state = state;
        }
    }

    /// Open node `index`: navigate if unlocked, report `Locked` otherwise.
    pub fn open_node(
        &self,
        index: usize,
        navigator: &mut dyn Navigator,
    ) -> Result<OpenOutcome, OpenError> {
        let node = self.nodes.get(index).ok_or(OpenError::NoSuchNode {
            index,
            total: self.nodes.len(),
        })?;

        if !node.state.is_unlocked() {
            log::debug!("Chapter {} clicked while locked", index + 1);
            return Ok(OpenOutcome::Locked);
        }

        navigator.navigate(&node.link)?;
        Ok(OpenOutcome::Navigated(node.link.clone()))
    }

    /// Lay the nodes out as a serpentine path centred in the viewport.
    pub fn layout(&mut self, width: f64, height: f64) {
        let n = self.nodes.len();
        if n == 0 {
            return;
        }

        let per_row = config::NODES_PER_ROW.max(1);
        let rows = (n + per_row - 1) / per_row;
        let cols = n.min(per_row);

        // Shrink the gaps on small windows so the path stays on screen
        let usable_w = (width - 4.0 * config::NODE_RADIUS).max(0.0);
        let usable_h = (height - config::PATH_TOP - 2.0 * config::NODE_RADIUS).max(0.0);
        let gap_x = if cols > 1 {
            config::NODE_GAP_X.min(usable_w / (cols - 1) as f64)
        } else {
            0.0
        };
        let gap_y = if rows > 1 {
            config::NODE_GAP_Y.min(usable_h / (rows - 1) as f64)
        } else {
            0.0
        };

        let path_w = (cols - 1) as f64 * gap_x;
        let path_h = (rows - 1) as f64 * gap_y;
        let origin_x = (width - path_w) / 2.0;
        let origin_y = config::PATH_TOP + ((height - config::PATH_TOP) - path_h) / 2.0;

        for node in &mut self.nodes {
            let row = node.index / per_row;
            let mut col = node.index % per_row;
            if row % 2 == 1 {
                col = per_row - 1 - col;
            }
            node.x = origin_x + col as f64 * gap_x;
            node.y = origin_y + row as f64 * gap_y;
        }
    }

    /// Index of the node under `point`, if any.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.nodes
            .iter()
            .find(|n| (Vec2::new(n.x, n.y) - point).length() <= n.radius)
            .map(|n| n.index)
    }

    pub fn set_pointer(&mut self, point: Vec2) {
        self.hovered = self.hit_test(point);
    }

    pub fn update(&mut self, dt_ms: f64) {
        for bloom in &mut self.blooms {
            bloom.update(dt_ms);
        }
        for node in &mut self.nodes {
            let target = if self.hovered == Some(node.index) && node.state.is_unlocked() {
                1.0
            } else {
                0.0
            };
            node.hover = smooth_towards(node.hover, target, dt_ms, config::HOVER_SPEED);
        }
    }

    pub fn render(&self, renderer: &dyn Renderer) {
        // Path segments behind the nodes
        for pair in self.nodes.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let alpha = if b.state.is_unlocked() { 0.9 } else { 0.4 };
            let color = if b.state.is_unlocked() {
                Color::from_hex(config::NODE_UNLOCKED_GLOW, alpha * 0.6)
            } else {
                Color::from_hex(config::PATH_COLOR, alpha)
            };
            renderer.stroke_line(Vec2::new(a.x, a.y), Vec2::new(b.x, b.y), color, 2.0);
        }

        for (node, bloom) in self.nodes.iter().zip(&self.blooms) {
            self.render_node(renderer, node, bloom);
        }
    }

    fn render_node(&self, renderer: &dyn Renderer, node: &ChapterNode, bloom: &Animation) {
        let label = node.label();

        match node.state {
            NodeState::Unlocked => {
                // Glow rings, wider on hover and while blooming
                let bloom_t = if bloom.is_active() { 1.0 - bloom.progress() } else { 0.0 };
                let grow = config::HOVER_GLOW_GROW * node.hover.max(bloom_t);
                let steps = 4;
                for i in 0..steps {
                    let t = (i + 1) as f64 / steps as f64;
                    let alpha = lerp(0.25, 0.05, t) * (0.5 + 0.5 * node.hover.max(bloom_t));
                    renderer.fill_circle(
                        node.x,
                        node.y,
                        node.radius + 4.0 * t + grow * t,
                        Color::from_hex(config::NODE_UNLOCKED_GLOW, alpha),
                    );
                }
                renderer.fill_circle(
                    node.x,
                    node.y,
                    node.radius,
                    Color::from_hex(config::NODE_UNLOCKED_BG, 1.0),
                );
                self.draw_label(renderer, node, &label, Color::from_hex(config::TEXT_DARK, 1.0));
            }
            NodeState::Locked => {
                renderer.fill_circle(
                    node.x,
                    node.y,
                    node.radius,
                    Color::from_hex(config::NODE_LOCKED_BG, 0.9),
                );
                renderer.stroke_circle(
                    node.x,
                    node.y,
                    node.radius,
                    Color::from_hex(config::NODE_LOCKED_BORDER, 1.0),
                    1.5,
                );
                self.draw_label(
                    renderer,
                    node,
                    &label,
                    Color::from_hex(config::TEXT_SECONDARY, 1.0),
                );
            }
        }
    }

    fn draw_label(&self, renderer: &dyn Renderer, node: &ChapterNode, label: &str, color: Color) {
        let size = config::NODE_FONT_SIZE;
        let w = renderer.text_width(label, size);
        renderer.draw_text(node.x - w / 2.0, node.y - size * 0.65, label, size, color);
    }
}

#[cfg(test)]
impl ChapterPath {
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::renderer::recording::{DrawCommand, RecordingRenderer};
    use crate::schedule::navigator::RecordingNavigator;
    use crate::schedule::schedule_config::LinkTemplate;
    use chrono::{TimeZone, Utc};

    fn schedule(total: usize) -> ScheduleConfig {
        ScheduleConfig::new(
            total,
            Utc.with_ymd_and_hms(2026, 2, 3, 15, 0, 0).unwrap(),
            7_200_000,
            LinkTemplate::default(),
        )
        .unwrap()
    }

    fn states(path: &ChapterPath) -> Vec<NodeState> {
        path.nodes().iter().map(|n| n.state).collect()
    }

    #[test]
    fn test_new_path_is_locked() {
        let path = ChapterPath::new(&schedule(20));
        assert_eq!(path.nodes().len(), 20);
        assert_eq!(path.unlocked_count(), 0);
        assert_eq!(path.nodes()[2].link, "chapters/chapter3.html");
    }

    #[test]
    fn test_apply_node_states_marks_prefix() {
        let mut path = ChapterPath::new(&schedule(20));
        for k in 0..=20 {
            path.apply_node_states(k);
            let s = states(&path);
            assert!(s[..k].iter().all(|s| *s == NodeState::Unlocked));
            assert!(s[k..].iter().all(|s| *s == NodeState::Locked));
        }
    }

    #[test]
    fn test_apply_node_states_is_rederived_not_incremental() {
        let mut path = ChapterPath::new(&schedule(5));
        path.apply_node_states(4);
        path.apply_node_states(1);
        assert_eq!(path.unlocked_count(), 1);
        assert_eq!(states(&path)[1], NodeState::Locked);
    }

    #[test]
    fn test_open_locked_node_never_navigates() {
        let mut path = ChapterPath::new(&schedule(20));
        path.apply_node_states(3);
        let mut nav = RecordingNavigator::default();

        assert_eq!(path.open_node(3, &mut nav).unwrap(), OpenOutcome::Locked);
        assert_eq!(path.open_node(19, &mut nav).unwrap(), OpenOutcome::Locked);
        assert!(nav.visited.borrow().is_empty());
    }

    #[test]
    fn test_open_unlocked_node_navigates_to_its_link() {
        let mut path = ChapterPath::new(&schedule(20));
        path.apply_node_states(3);
        let mut nav = RecordingNavigator::default();

        for i in 0..3 {
            let outcome = path.open_node(i, &mut nav).unwrap();
            assert_eq!(outcome, OpenOutcome::Navigated(format!("chapters/chapter{}.html", i + 1)));
        }
        assert_eq!(
            *nav.visited.borrow(),
            vec![
                "chapters/chapter1.html",
                "chapters/chapter2.html",
                "chapters/chapter3.html"
            ]
        );
    }

    #[test]
    fn test_open_out_of_range() {
        let path = ChapterPath::new(&schedule(2));
        let mut nav = RecordingNavigator::default();
        let err = path.open_node(2, &mut nav).unwrap_err();
        assert!(matches!(err, OpenError::NoSuchNode { index: 2, total: 2 }));
    }

    #[test]
    fn test_layout_is_serpentine_and_centered() {
        let mut path = ChapterPath::new(&schedule(10));
        path.layout(1280.0, 720.0);
        let nodes = path.nodes();

        // First row runs left to right, second row right to left
        assert!(nodes[0].x < nodes[4].x);
        assert!((nodes[5].x - nodes[4].x).abs() < 1e-9);
        assert!(nodes[5].y > nodes[4].y);
        assert!(nodes[9].x < nodes[5].x);

        let mid = (nodes[0].x + nodes[4].x) / 2.0;
        assert!((mid - 640.0).abs() < 1e-9);
    }

    #[test]
    fn test_layout_fits_small_window() {
        let mut path = ChapterPath::new(&schedule(20));
        path.layout(320.0, 240.0);
        for n in path.nodes() {
            assert!(n.x >= 0.0 && n.x <= 320.0, "x {} off screen", n.x);
            assert!(n.y >= 0.0 && n.y <= 240.0, "y {} off screen", n.y);
        }
    }

    #[test]
    fn test_hit_test() {
        let mut path = ChapterPath::new(&schedule(5));
        path.layout(800.0, 600.0);
        let n2 = path.nodes()[2].clone();

        assert_eq!(path.hit_test(Vec2::new(n2.x, n2.y)), Some(2));
        assert_eq!(path.hit_test(Vec2::new(n2.x + n2.radius - 1.0, n2.y)), Some(2));
        assert_eq!(path.hit_test(Vec2::new(n2.x, n2.y + n2.radius + 1.0)), None);
    }

    #[test]
    fn test_hover_only_glows_unlocked() {
        let mut path = ChapterPath::new(&schedule(3));
        path.layout(800.0, 600.0);
        path.apply_node_states(1);

        let locked = path.nodes()[2].clone();
        path.set_pointer(Vec2::new(locked.x, locked.y));
        assert_eq!(path.hovered(), Some(2));
        path.update(500.0);
        assert_eq!(path.nodes()[2].hover, 0.0);

        let open = path.nodes()[0].clone();
        path.set_pointer(Vec2::new(open.x, open.y));
        path.update(500.0);
        assert!(path.nodes()[0].hover > 0.9);
    }

    #[test]
    fn test_render_draws_every_label() {
        let mut path = ChapterPath::new(&schedule(4));
        path.layout(800.0, 600.0);
        path.apply_node_states(2);

        let renderer = RecordingRenderer::new();
        path.render(&renderer);
        assert_eq!(renderer.texts(), vec!["1", "2", "3", "4"]);

        let lines = renderer
            .take()
            .into_iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(lines, 3);
    }

    #[test]
    fn test_bloom_only_after_first_refresh() {
        let mut path = ChapterPath::new(&schedule(3));
        path.apply_node_states(1);
        assert!(!path.blooms[0].is_active());

        path.apply_node_states(2);
        assert!(path.blooms[1].is_active());
        path.update(config::UNLOCK_BLOOM_MS + 1.0);
        assert!(!path.blooms[1].is_active());
    }
}
